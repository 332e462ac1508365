/// Presence of this variable turns on before/after snapshots of candidate ordering.
pub const DEBUG_RESOLVER_ENV: &str = "DEBUG_RESOLVER";

pub(crate) fn debug_resolver_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(DEBUG_RESOLVER_ENV).is_some()
}
