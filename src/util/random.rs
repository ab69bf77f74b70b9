use crate::record::Record;
use rand::{distributions::Alphanumeric, Rng};

pub trait Random {
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

const RANDOM_RATING_STEPS: u32 = 100;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

impl Random for Record {
    // non-empty title, rating in [0.0, 10.0) with one decimal like the real datasets
    fn gen<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut title = String::gen(rng);
        if title.is_empty() {
            title.push('_');
        }

        let rating = rng.gen_range(0..RANDOM_RATING_STEPS) as f64 / 10.0;

        Record::new(title, rating)
    }
}
