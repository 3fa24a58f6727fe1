//! Damping capability shared by bodies and components

/// Anything whose motion slows down over time
pub trait Damping {
    /// The meter/second quantity by which the linear velocity slows
    fn linear_damping(&self) -> f32;

    /// Set the linear damping coefficient
    fn set_linear_damping(&mut self, damping: f32);

    /// The radian/second quantity by which the angular velocity slows
    fn angular_damping(&self) -> f32;

    /// Set the angular damping coefficient
    fn set_angular_damping(&mut self, damping: f32);
}

/// Factor a velocity is scaled by after damping over `dt` seconds
pub fn damping_factor(damping: f32, dt: f32) -> f32 {
    1.0 / (1.0 + dt * damping)
}
