//! Media partner (Basın) - press outlet shown with a logo and link

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPartner {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub image: String,
}
