//! Validation for hand tracking settings.

use crate::schema::VoxelConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f32};

pub(crate) fn validate_tracking(errors: &mut Vec<String>, config: &VoxelConfig) {
    let t = &config.tracking;
    validate_range(
        errors,
        "tracking.detect_interval_ms",
        t.detect_interval_ms,
        10,
        1000,
    );
    validate_range_f32(errors, "tracking.extension_ratio", t.extension_ratio, 1.0, 3.0);
    validate_range_f32(errors, "tracking.area_floor", t.area_floor, 0.0, 1.0);
    validate_positive(errors, "tracking.area_span", t.area_span);
}
