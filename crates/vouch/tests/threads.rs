//! One validator, many threads, one check context per thread.

use std::sync::Arc;
use std::thread;
use vouch::prelude::*;
use vouch::{Overrides, load_validator};

#[test]
fn contexts_on_separate_threads_share_one_validator() {
    let validator = load_validator("default_name = \"the item\"", Overrides::default())
        .expect("validator");

    let handles: Vec<_> = (0..8i64)
        .map(|worker| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let ctx = validator.context();
                let mut failures = 0;
                for i in 0..200i64 {
                    let value = worker * 1000 + i;
                    let result = if i % 2 == 0 {
                        ctx.int(value).not().is_multiple_of(2).map(drop)
                    } else {
                        ctx.int(value).named("odd").is_multiple_of(2).map(drop)
                    };
                    if let Err(failure) = result {
                        let message = failure.to_string();
                        if i % 2 == 0 {
                            assert_eq!(
                                message,
                                format!("the item must not be a multiple of 2, but was {value}")
                            );
                        } else {
                            assert_eq!(
                                message,
                                format!("odd must be a multiple of 2, but was {value}")
                            );
                        }
                        failures += 1;
                    }
                }
                assert_eq!(ctx.pooled(), 1);
                failures
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), 200);
    }
}
