//! Default TOML config template.

pub(crate) fn default_config_toml() -> String {
    r##"# Tabdock Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# sep_height = 2         # 0-8, underline below each tab row
# bar_margin = 6         # 0-20, vertical padding around titles
# tab_margin = 10        # 0-40, horizontal padding around titles
# folder_margin = 5      # 1-21, odd, gap between split siblings
# icon_size = 24         # 8-64, close / dropdown / maximize slots
# min_width = 50         # 1-500, smallest width left by a separator drag
# min_height = 75        # 1-500, smallest height left by a separator drag
# min_tab_width = 50     # 1-500

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
