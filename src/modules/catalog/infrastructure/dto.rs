use crate::modules::catalog::domain::ItemCategory;
use crate::shared::errors::AppError;
use serde::Deserialize;

/// One entry of `GET /items`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDto {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

impl TryFrom<ItemDto> for ItemCategory {
    type Error = AppError;

    fn try_from(dto: ItemDto) -> Result<Self, Self::Error> {
        ItemCategory::new(dto.id, dto.title, dto.image_url)
    }
}
