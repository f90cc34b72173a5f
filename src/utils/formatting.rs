use dicom::core::Tag;

/// Renders a tag the way provenance labels are written, e.g. `(0019,105A)`.
pub fn format_tag(tag: Tag) -> String {
    format!("({:04X},{:04X})", tag.group(), tag.element())
}

/// Human readable duration, `"M min S sec"`.
///
/// Seconds are rounded half-to-even before splitting, so `90.5` renders as
/// `1 min 30 sec` and `91.5` as `1 min 32 sec`.
pub fn seconds_to_min_sec(total_seconds: f64) -> Option<String> {
    if !total_seconds.is_finite() {
        return None;
    }
    let seconds = total_seconds.round_ties_even() as i64;
    let minutes = seconds.div_euclid(60);
    let rest = seconds.rem_euclid(60);
    Some(format!("{minutes} min {rest} sec"))
}
