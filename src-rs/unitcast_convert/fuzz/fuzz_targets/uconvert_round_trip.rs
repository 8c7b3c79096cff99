#![no_main]

use libfuzzer_sys::fuzz_target;
use shared::{FuzzDistanceUnit, FuzzExactValue};
use unitcast_convert::{ConversionError, Quantity, uconvert};
use unitcast_shared::float::is_close;

fuzz_target!(|data: (FuzzDistanceUnit, FuzzDistanceUnit, FuzzExactValue)| {
    let (FuzzDistanceUnit(target), FuzzDistanceUnit(source), FuzzExactValue(value)) = data;
    let quantity = Quantity::new(value, source.clone());

    let there = match uconvert(&target, &quantity) {
        Ok(there) => there,
        Err(ConversionError::NumericRange(_)) => return,
        Err(error) => panic!("unexpected error: {error}"),
    };

    let back = match uconvert(&source, &there) {
        Ok(back) => back,
        Err(ConversionError::NumericRange(_)) => return,
        Err(error) => panic!("unexpected error: {error}"),
    };

    assert_eq!(back.unit(), &source);

    if back.value().kind().is_exact() {
        assert_eq!(back.value(), quantity.value());
    } else {
        assert!(
            is_close(back.value().to_f64(), value.to_f64()),
            "{quantity} -> {there} -> {back}"
        );
    }
});
