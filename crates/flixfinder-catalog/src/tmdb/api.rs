use crate::error::{CatalogError, Result};
use crate::query::SearchQuery;
use flixfinder_models::{CatalogPage, Movie};
use reqwest::Client;
use tracing::debug;

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Issue an authenticated GET and return the body of a 2xx response
async fn get_body(
    client: &Client,
    url: &str,
    access_token: &str,
    params: &[(&str, String)],
) -> Result<String> {
    debug!("GET {} {:?}", url, params);

    let response = client
        .get(url)
        .query(params)
        .header("Authorization", format!("Bearer {}", access_token))
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(CatalogError::Api {
            status_code: status.as_u16(),
            message: body,
        });
    }

    Ok(body)
}

/// Movies tagged with a genre, most popular first (first page only)
pub async fn discover_movies(
    client: &Client,
    base_url: &str,
    access_token: &str,
    genre_id: i64,
) -> Result<CatalogPage> {
    let url = endpoint(base_url, "/discover/movie");
    let params = [
        ("with_genres", genre_id.to_string()),
        ("sort_by", "popularity.desc".to_string()),
    ];

    let body = get_body(client, &url, access_token, &params).await?;
    Ok(CatalogPage::from_json(&body)?)
}

/// Title search filtered by minimum rating and optional release year
pub async fn search_movies(
    client: &Client,
    base_url: &str,
    access_token: &str,
    query: &SearchQuery,
) -> Result<CatalogPage> {
    if query.is_blank() {
        return Err(CatalogError::BlankQuery);
    }

    let url = endpoint(base_url, "/search/movie");
    let body = get_body(client, &url, access_token, &query.params()).await?;
    Ok(CatalogPage::from_json(&body)?)
}

/// Single movie record by id
pub async fn get_movie(
    client: &Client,
    base_url: &str,
    access_token: &str,
    movie_id: i64,
) -> Result<Movie> {
    let url = endpoint(base_url, &format!("/movie/{}", movie_id));
    let body = get_body(client, &url, access_token, &[]).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("https://api.themoviedb.org/3/", "/discover/movie"),
            "https://api.themoviedb.org/3/discover/movie"
        );
        assert_eq!(
            endpoint("http://localhost:1234", "/movie/7"),
            "http://localhost:1234/movie/7"
        );
    }
}
