#![no_main]

use libfuzzer_sys::fuzz_target;
use shared::{FuzzExactValue, FuzzTemperatureUnit};
use unitcast_convert::{ConversionError, Quantity, uconvert};

fuzz_target!(|data: (FuzzTemperatureUnit, FuzzTemperatureUnit, FuzzExactValue)| {
    let (FuzzTemperatureUnit(target), FuzzTemperatureUnit(source), FuzzExactValue(value)) = data;
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

    // exact affine conversions are invertible
    assert_eq!(back.value(), quantity.value(), "{quantity} -> {there} -> {back}");
});
