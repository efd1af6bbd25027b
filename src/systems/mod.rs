#[cfg(feature = "system-estimate")] pub mod estimate;
