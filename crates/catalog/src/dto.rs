//! Wire types for catalog responses.
//!
//! Bodies are accepted bare or wrapped in a `{"data": ...}` envelope. Item
//! keys are camelCase, with the snake_case keys of Jikan-style catalogs
//! (`mal_id`, `image_url`, `images.jpg.image_url`) accepted as well.

use serde::Deserialize;
use watchlist_core::catalog::CatalogItem;

/// A response body, either `{"data": T}` or a bare `T`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    #[serde(alias = "mal_id")]
    pub external_id: i64,
    pub title: String,
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
    pub images: Option<ImagesDto>,
    pub synopsis: Option<String>,
    pub score: Option<f64>,
    pub rank: Option<i64>,
    pub popularity: Option<i64>,
    pub episodes: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImagesDto {
    pub jpg: Option<ImageSetDto>,
}

#[derive(Debug, Deserialize)]
pub struct ImageSetDto {
    pub image_url: Option<String>,
}

impl From<CatalogItemDto> for CatalogItem {
    fn from(dto: CatalogItemDto) -> Self {
        // The nested jpg image wins over a flat image_url when both exist.
        let nested = dto
            .images
            .and_then(|images| images.jpg)
            .and_then(|jpg| jpg.image_url);
        let image_url = [nested, dto.image_url]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .unwrap_or_default();

        CatalogItem {
            external_id: dto.external_id,
            title: dto.title,
            image_url,
            synopsis: dto.synopsis,
            score: dto.score,
            rank: dto.rank,
            popularity: dto.popularity,
            episodes: dto.episodes,
            kind: dto.kind,
            airing_status: dto.status,
        }
    }
}
