#![no_main]

use libfuzzer_sys::fuzz_target;
use shared::FuzzDistanceUnit;
use unitcast_convert::{ConversionError, convfact};
use unitcast_shared::float::is_close;

fuzz_target!(|data: (FuzzDistanceUnit, FuzzDistanceUnit)| {
    let (FuzzDistanceUnit(target), FuzzDistanceUnit(source)) = data;

    assert_eq!(
        convfact(&source, &source).map(|factor| factor.is_one()),
        Ok(true)
    );

    let forward = convfact(&target, &source);
    let backward = convfact(&source, &target);

    let (forward, backward) = match (forward, backward) {
        (Ok(forward), Ok(backward)) => (forward, backward),
        (Err(ConversionError::NumericRange(_)), _) | (_, Err(ConversionError::NumericRange(_))) => {
            return;
        }
        (forward, backward) => panic!("unexpected results: {forward:?}, {backward:?}"),
    };

    let Ok(product) = forward.checked_mul(&backward) else {
        return;
    };

    if forward.is_exact() && backward.is_exact() {
        assert!(product.is_one(), "{forward} * {backward} = {product}");
    } else {
        assert!(
            is_close(product.to_f64(), 1.0),
            "{forward} * {backward} = {product}"
        );
    }
});
