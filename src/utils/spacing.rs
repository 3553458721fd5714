/// Utility constants for consistent spacing across the page

/// Page container: centered, 72rem max width, 16px horizontal and 80px vertical padding
pub const CONTENT_PADDING: &str = "container px-4 py-20";

/// Gap below the large sections
/// 128px
pub const SECTION_SPACING: &str = "mb-32";

/// Vertical rhythm inside a section
/// 24px
pub const STACK_SPACING: &str = "stack-6";

/// Gap inside card grids
/// 16px
pub const GAP_SPACING: &str = "gap-4";

/// Card padding
/// 16px
pub const CARD_PADDING: &str = "p-4";
