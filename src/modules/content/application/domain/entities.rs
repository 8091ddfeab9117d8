use uuid::Uuid;

/// One entry in an ordered link collection. Bio links and social links
/// share this shape; only the backing table differs.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkItem {
    pub id: Uuid,
    pub owner: Uuid,
    pub label: String,
    pub url: String,
    pub position: i32,
}
