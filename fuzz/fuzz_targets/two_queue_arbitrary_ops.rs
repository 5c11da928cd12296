#![no_main]

use libfuzzer_sys::fuzz_target;
use lrufreq::error::CacheError;
use lrufreq::policy::two_queue::{Segment, TwoQueueCache};

// Fuzz arbitrary operation sequences on TwoQueueCache
//
// First byte picks the capacity; each following pair is (op, key). After
// every operation the full structural check must pass and both queues must
// respect the capacity.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 16) + 1;
    let Ok(mut cache) = TwoQueueCache::<u8, u16>::new(capacity) else {
        return;
    };

    for pair in rest.chunks_exact(2) {
        let (op, key) = (pair[0] % 5, pair[1] % 64);
        match op {
            0 => {
                // put
                let resident = cache.contains(&key);
                match cache.put(key, u16::from(key) + 1) {
                    Ok(()) => assert!(!resident),
                    Err(e) => {
                        assert!(resident);
                        assert_eq!(e, CacheError::DuplicateKey);
                    }
                }
            }
            1 => {
                // lookup
                let resident = cache.contains(&key);
                assert_eq!(cache.lookup(&key), resident);
                if resident {
                    assert_eq!(cache.protected_position(&key), Some(0));
                }
            }
            2 => {
                // fetch
                match cache.fetch(&key) {
                    Ok(v) => assert_eq!(*v, u16::from(key) + 1),
                    Err(e) => assert_eq!(e, CacheError::KeyNotFound),
                }
            }
            3 => {
                // segment and position agree
                match cache.segment_of(&key) {
                    Some(Segment::Admission) => assert!(cache.admission_position(&key).is_some()),
                    Some(Segment::Protected) => assert!(cache.protected_position(&key).is_some()),
                    None => assert!(!cache.contains(&key)),
                }
            }
            4 => {
                // occasional clear
                if key == 0 {
                    cache.clear();
                    assert!(cache.is_empty());
                }
            }
            _ => unreachable!(),
        }

        cache.check_invariants().unwrap();
        assert!(cache.admission_len() <= capacity);
        assert!(cache.protected_len() <= capacity);
    }
});
