//! HTTP handlers for the scrape trigger API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use jobharvest_lib::registry::{self, CompanyConfig};
use jobharvest_lib::{run_company, site_for, validation, FetchClient};

use crate::state::AppState;

/// `GET /healthz`
pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /companies` — every configured company with its page range.
pub async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<Value>) {
    let rows = match registry::read_input_csv(&state.input_path) {
        Ok(rows) => rows,
        Err(err) => return failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };

    let companies: Vec<Value> = rows
        .iter()
        .map(|row| {
            json!({
                "name": row.company,
                "baseUrl": row.base_url,
                "startPage": row.start_page(),
                "endPage": end_page_value(row),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "success": true, "companies": companies })),
    )
}

/// `GET /scrape/{company}` — look the company up, spawn its run in the
/// background, and answer immediately with the run's parameters.
pub async fn scrape_company(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> (StatusCode, Json<Value>) {
    let company = match validation::validate_company(&company) {
        Ok(name) => name,
        Err(err) => return failure(StatusCode::BAD_REQUEST, &err.to_string()),
    };

    let rows = match registry::read_input_csv(&state.input_path) {
        Ok(rows) => rows,
        Err(err) => return failure(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
    };
    let Some(config) = registry::find_company(&rows, &company).cloned() else {
        return failure(
            StatusCode::NOT_FOUND,
            &format!("Company {} not found in input CSV.", company),
        );
    };
    let Some(site) = site_for(&config.company) else {
        return failure(
            StatusCode::NOT_FOUND,
            &format!("No scraper registered for {}.", config.company),
        );
    };

    let key = site.key().to_string();
    if !state.try_start(&key) {
        return failure(
            StatusCode::CONFLICT,
            &format!("A scrape is already running for {}.", site.company()),
        );
    }

    let output_file = state
        .output_dir
        .join(format!("{}.csv", site.company().replace(' ', "")));
    let details = json!({
        "company": config.company,
        "startPage": config.start_page(),
        "endPage": end_page_value(&config),
        "outputFile": output_file.display().to_string(),
    });

    tracing::info!(
        company = site.company(),
        "starting scrape from page {} to {}",
        config.start_page(),
        config
            .end_page
            .map(|p| p.to_string())
            .unwrap_or_else(|| "auto".to_string())
    );

    let output_dir = state.output_dir.clone();
    let state = state.clone();
    tokio::spawn(async move {
        match FetchClient::new() {
            Ok(client) => match run_company(site, &client, &config, &output_dir).await {
                Ok(summary) => {
                    tracing::info!(
                        company = %summary.company,
                        "scraping completed: {} jobs in {}",
                        summary.jobs_written,
                        summary.output_file.display()
                    );
                }
                Err(err) => {
                    tracing::error!(company = %config.company, "scrape run failed: {}", err);
                }
            },
            Err(err) => {
                tracing::error!(company = %config.company, "could not build fetch client: {}", err);
            }
        }
        state.finish(&key);
    });

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": format!("Scraping started for {}", company),
            "details": details,
        })),
    )
}

/// The end page renders as a number or the literal "auto".
fn end_page_value(config: &CompanyConfig) -> Value {
    match config.end_page {
        Some(page) => json!(page),
        None => json!("auto"),
    }
}

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "message": message })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_input(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "jobharvest-handlers-{}-{}.csv",
            std::process::id(),
            tag
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn state_with_input(path: PathBuf) -> Arc<AppState> {
        Arc::new(AppState::new(path, std::env::temp_dir().join("jobharvest-out")))
    }

    const INPUT: &str = "company,base_url,start_page,end_page\n\
        IBM,https://careers.example.com/search?q=data,1,2\n\
        Deloitte,https://jobs.example.com/search/?q=,1,\n";

    #[tokio::test]
    async fn companies_lists_configured_rows() {
        let path = write_input("companies", INPUT);
        let state = state_with_input(path.clone());

        let (status, Json(body)) = list_companies(State(state)).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let companies = body["companies"].as_array().unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0]["name"], "IBM");
        assert_eq!(companies[0]["endPage"], 2);
        assert_eq!(companies[1]["endPage"], "auto");
    }

    #[tokio::test]
    async fn scrape_unknown_company_is_404() {
        let path = write_input("unknown", INPUT);
        let state = state_with_input(path.clone());

        let (status, Json(body)) =
            scrape_company(State(state), Path("globex".to_string())).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("not found in input CSV"));
    }

    #[tokio::test]
    async fn scrape_company_without_scraper_is_404() {
        let path = write_input(
            "no-scraper",
            "company,base_url,start_page,end_page\n\
             Globex,https://globex.example.com/jobs?q=,1,2\n",
        );
        let state = state_with_input(path.clone());

        let (status, Json(body)) =
            scrape_company(State(state), Path("globex".to_string())).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("No scraper registered"));
    }

    #[tokio::test]
    async fn scrape_while_running_is_409() {
        let path = write_input("conflict", INPUT);
        let state = state_with_input(path.clone());
        assert!(state.try_start("ibm"));

        let (status, Json(body)) =
            scrape_company(State(state), Path("IBM".to_string())).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn scrape_known_company_answers_immediately() {
        // Base URL points at a closed port; the spawned run fails in the
        // background while the response reports the started run.
        let path = write_input(
            "started",
            "company,base_url,start_page,end_page\n\
             IBM,http://127.0.0.1:9/search?q=data,2,3\n",
        );
        let state = state_with_input(path.clone());

        let (status, Json(body)) =
            scrape_company(State(state), Path("ibm".to_string())).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["details"]["company"], "IBM");
        assert_eq!(body["details"]["startPage"], 2);
        assert_eq!(body["details"]["endPage"], 3);
        assert!(body["details"]["outputFile"]
            .as_str()
            .unwrap()
            .ends_with("IBM.csv"));
    }

    #[tokio::test]
    async fn missing_input_file_is_500() {
        let state = state_with_input(PathBuf::from("/nonexistent/input.csv"));
        let (status, Json(body)) = list_companies(State(state)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
