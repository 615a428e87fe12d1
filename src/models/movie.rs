use serde::Deserialize;

/// Suffix that asks the image host for a 600px-wide poster.
const RESIZED_IMAGE_SUFFIX: &str = "._V0_UX600_.jpg";

/// Movie-list payload as returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MostPopularMovies {
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub items: Vec<MovieItem>,
}

/// A single catalog entry in wire form.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieItem {
    pub id: String,
    #[serde(rename = "fullTitle", default)]
    pub title: String,
    #[serde(rename = "imDbRating", default)]
    pub rating: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

/// A catalog movie with its rating already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub rating: f32,
    pub image_url: String,
}

impl Movie {
    /// URL of a reduced-size rendition of the poster.
    ///
    /// Poster URLs carry sizing directives after the first `._`; everything
    /// from there on is replaced. URLs without the marker are used as-is.
    pub fn resized_image_url(&self) -> String {
        match self.image_url.split_once("._") {
            Some((base, _)) => format!("{}{}", base, RESIZED_IMAGE_SUFFIX),
            None => self.image_url.clone(),
        }
    }
}

impl From<MovieItem> for Movie {
    fn from(item: MovieItem) -> Self {
        let rating = item.rating.trim().parse::<f32>().unwrap_or(0.0);
        Self {
            id: item.id,
            title: item.title,
            rating,
            image_url: item.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(rating: &str) -> MovieItem {
        MovieItem {
            id: "tt0111161".to_string(),
            title: "The Shawshank Redemption (1994)".to_string(),
            rating: rating.to_string(),
            image_url: "https://m.media-amazon.com/images/M/poster._V1_Ratio0.6716_AL_.jpg"
                .to_string(),
        }
    }

    #[test]
    fn test_rating_is_parsed_from_text() {
        let movie = Movie::from(item("9.2"));
        assert!((movie.rating - 9.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unparseable_rating_defaults_to_zero() {
        assert_eq!(Movie::from(item("")).rating, 0.0);
        assert_eq!(Movie::from(item("n/a")).rating, 0.0);
    }

    #[test]
    fn test_resized_image_url() {
        let movie = Movie::from(item("9.2"));
        assert_eq!(
            movie.resized_image_url(),
            "https://m.media-amazon.com/images/M/poster._V0_UX600_.jpg"
        );

        let plain = Movie {
            image_url: "https://example.com/poster.jpg".to_string(),
            ..movie
        };
        assert_eq!(plain.resized_image_url(), "https://example.com/poster.jpg");
    }

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "errorMessage": "",
            "items": [
                {"id": "tt1", "rank": "1", "fullTitle": "One", "imDbRating": "8.1", "image": "https://x/1.jpg"},
                {"id": "tt2", "image": "https://x/2.jpg"}
            ]
        }"#;
        let payload: MostPopularMovies = serde_json::from_str(json).unwrap();
        assert_eq!(payload.error_message.as_deref(), Some(""));
        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[1].rating, "");
        assert_eq!(payload.items[1].title, "");
    }
}
