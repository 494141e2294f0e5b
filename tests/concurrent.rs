use std::collections::HashSet;
use std::thread;

use srand::{
    generate_random_float_range, generate_random_int_range, generate_random_string, generate_uuid,
};

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

#[test]
fn concurrent_calls_stay_valid() {
    let results: Vec<Vec<String>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    let mut uuids = Vec::with_capacity(PER_THREAD);
                    for _ in 0..PER_THREAD {
                        let i = generate_random_int_range(42, 1337).unwrap();
                        assert!((42..1337).contains(&i));

                        let f = generate_random_float_range(12.2, 16.6).unwrap();
                        assert!((12.2..16.6).contains(&f));

                        assert_eq!(generate_random_string(32).unwrap().len(), 44);

                        uuids.push(generate_uuid().unwrap());
                    }
                    uuids
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<&String> = results.iter().flatten().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}
