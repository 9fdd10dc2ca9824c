//! UI symbols (markers, empty labels)

/// Row markers
pub mod markers {
    /// Gutter marker for lines owned by the armed commit
    pub const ARMED: char = '▌';
}
