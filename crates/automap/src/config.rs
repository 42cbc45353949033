use automap_core::stmt::DEFAULT_DATE_TIME_FORMAT;

/// Order in which the branches of a runtime union dispatch are tested.
///
/// A value can match several members of a source union, for example an
/// instance of `Cat` matches both `Cat` and its parent `Animal`. The first
/// matching branch wins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnionPolicy {
    /// Test members in declaration order.
    #[default]
    FirstDeclared,

    /// Test a member before any member that subsumes it: subclasses before
    /// their parents, `int` before `float`, anything before `mixed`.
    MostSpecific,
}

/// Registry-wide settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of generated mapper identities.
    pub class_prefix: String,

    /// Skip array keys that are absent from the source, instead of mapping
    /// them as `null`.
    pub attribute_checking: bool,

    /// Create metadata for unknown pairs on first use.
    pub auto_register: bool,

    /// Format used to convert dates to and from strings.
    pub date_time_format: String,

    /// Allow an existing instance of a read-only class to be populated.
    pub allow_readonly_target_to_populate: bool,

    pub union_policy: UnionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            class_prefix: "Mapper_".to_string(),
            attribute_checking: true,
            auto_register: true,
            date_time_format: DEFAULT_DATE_TIME_FORMAT.to_string(),
            allow_readonly_target_to_populate: false,
            union_policy: UnionPolicy::default(),
        }
    }
}
