//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# voxel-cloud configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[particles]
# count = 30000             # 1000-200000, fixed for the session
# size = 1.5                # 0.1-3.0
# flow_speed = 0.5          # 0.0-5.0
# interaction_radius = 1.5  # 0.0-10.0
# model_scale = 1.0         # 0.5-2.5
# color_a = "#00ccff"
# color_b = "#7700ff"
# initial_shape = "36"      # 36, PYRAMID, CUBE, PLANET, ROCKET, MOBIUS, HEART

[effects]
# bloom_strength = 1.8      # 0.0-5.0

[morph]
# rate = 1.5                # 0.1-10.0, progress per second

[interaction]
# force_response = 3.0
# rotation_response = 5.0
# yaw_range = 1.5           # multiples of pi
# pitch_range = 0.5         # multiples of pi
# idle_yaw_speed = 0.2      # radians per second
# pitch_relax = 2.0
# cursor_follow = 0.1       # 0.0-1.0

[camera]
# fov_degrees = 35.0        # 10-120
# rest_distance = 16.0
# open_distance = 120.0
# fist_distance = 10.0
# neutral_far = 20.0
# neutral_near = 12.0
# open_response = 4.0
# response = 2.5
# linger = 60.0

[tracking]
# enabled = true
# detect_interval_ms = 50   # 10-1000
# extension_ratio = 1.5     # 1.0-3.0
# area_floor = 0.05
# area_span = 0.25
# mirror_x = true

[glyph]
# asset = "glyphs/36.json"  # unset = built-in "36"

[logging]
# level = "INFO"            # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
