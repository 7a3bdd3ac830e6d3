/// Clamps `value` into `[min, i16::MAX]`.
///
/// Console coordinates are 16 bit while window metrics arrive as 32 bit
/// values.
pub const fn clamp_to_short_max(value: i32, min: i16) -> i16 {
    if value < min as i32 {
        min
    } else if value > i16::MAX as i32 {
        i16::MAX
    } else {
        value as i16
    }
}
