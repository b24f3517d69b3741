mod edge_filter;
mod file_pattern_matcher;
mod legacy_format_merger;
mod module_name_codec;
mod orphan_attacher;

pub use edge_filter::EdgeFilter;
pub use file_pattern_matcher::FilePatternMatcher;
pub use legacy_format_merger::LegacyFormatMerger;
pub use module_name_codec::ModuleNameCodec;
pub use orphan_attacher::OrphanAttacher;
