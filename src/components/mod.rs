pub mod analysis_panel;
pub mod contradiction_list;
pub mod download_button;
pub mod enhancement_panel;
pub mod field;
pub mod formula_panel;
pub mod language_select;
pub mod result_field;
pub mod sidebar;
pub mod status_banner;

/// Element ids of the three operation panels, also the sidebar anchors.
pub const GENERATE_SECTION: &str = "generate";
pub const ANALYZE_SECTION: &str = "analyze";
pub const ENHANCE_SECTION: &str = "enhance";
