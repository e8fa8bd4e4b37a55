#[macro_export]
macro_rules! impl_angle_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(value: impl Into<f64>) -> Self {
                Self(value.into())
            }
        }
    };
}
