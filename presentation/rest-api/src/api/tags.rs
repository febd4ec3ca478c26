use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Shopping bags per user
    Bags,
    /// Lines inside a shopping bag
    BagItems,
}
