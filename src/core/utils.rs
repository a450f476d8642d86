use crate::core::errors::DtypeCastError;
use num_traits::{FromPrimitive, ToPrimitive};
use std::any::type_name;

// All numeric traffic between element types goes through `f64`, so the
// precision bound of every operation is double precision.

pub(crate) fn cast_from_f64<T>(value: f64) -> Result<T, DtypeCastError>
where
    T: FromPrimitive,
{
    T::from_f64(value).ok_or(DtypeCastError::FromF64 {
        value,
        dtype: type_name::<T>(),
    })
}

pub(crate) fn cast_to_f64<T>(value: T) -> Result<f64, DtypeCastError>
where
    T: ToPrimitive + Copy,
{
    value.to_f64().ok_or(DtypeCastError::ToF64 {
        dtype: type_name::<T>(),
    })
}
