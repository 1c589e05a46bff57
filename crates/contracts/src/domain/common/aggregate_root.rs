/// Root of an aggregate.
///
/// Carries the static naming the backend uses for table names.
pub trait AggregateRoot {
    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "product")
    fn collection_name() -> &'static str;

    /// Full system name, also the table name (e.g. "a001_product")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
