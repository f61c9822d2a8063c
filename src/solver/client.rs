//! HTTP client for the solving service.
//!
//! One documented contract: `POST {endpoint}/solve` with a multipart field
//! named `image`. Success is a 2xx with a JSON `solution` (and, from the
//! reference service, the detected `grid` of givens); failure is a non-2xx
//! with a JSON `error` that is surfaced verbatim. Everything else maps to a
//! generic outcome -- the client never second-guesses the service.

use crate::solver::grid::Grid;
use once_cell::sync::Lazy;
use reqwest::multipart;
use serde::Deserialize;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Clone, thiserror::Error)]
pub enum SolveError {
    /// Solve was triggered without a usable static image. Never reaches the
    /// network.
    #[error("Please upload or capture an image first.")]
    NoImageSelected,
    /// Non-2xx answer; carries the service-provided message.
    #[error("{0}")]
    Service(String),
    /// 2xx answer whose body is not a well-formed 9x9 solution.
    #[error("The solver returned an unreadable response.")]
    MalformedResponse,
    /// No usable response at all (connection refused, timeout, ...).
    #[error("Error connecting to the solver service.")]
    Transport(String),
}

/// A solved puzzle as returned by the service.
#[derive(Debug, Clone)]
pub struct Solved {
    pub solution: Grid,
    /// The detected givens, when the service included them. Purely cosmetic:
    /// used to emphasize pre-filled cells in the rendered grid.
    pub givens: Option<Grid>,
}

/// Result of one submission, tagged with the request generation it was
/// issued for so stale answers can be dropped.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub generation: u64,
    pub result: Result<Solved, SolveError>,
}

#[derive(Deserialize)]
struct SolvedBody {
    solution: Vec<Vec<u8>>,
    /// Taken as raw JSON so a mangled `grid` cannot poison an otherwise valid
    /// body; only `solution` is load-bearing.
    #[serde(default)]
    grid: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Submits `image` to the solving service.
///
/// Never retries; the caller decides what a failed outcome means.
pub async fn submit(endpoint: String, image: Vec<u8>, generation: u64) -> SolveOutcome {
    let result = post_image(&endpoint, image).await;

    if let Err(e) = &result {
        log::warn!("solve request (generation {generation}) failed: {e:?}");
    }

    SolveOutcome { generation, result }
}

async fn post_image(endpoint: &str, image: Vec<u8>) -> Result<Solved, SolveError> {
    let part = multipart::Part::bytes(image)
        .file_name("sudoku.jpg")
        .mime_str("image/jpeg")
        .map_err(|e| SolveError::Transport(e.to_string()))?;
    let form = multipart::Form::new().part("image", part);

    let url = format!("{}/solve", endpoint.trim_end_matches('/'));
    let response = CLIENT
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| SolveError::Transport(e.to_string()))?;

    let success = response.status().is_success();
    let body = response
        .bytes()
        .await
        .map_err(|e| SolveError::Transport(e.to_string()))?;

    interpret_response(success, &body)
}

/// Maps an HTTP answer onto the solve contract. Pure, so the whole response
/// surface is testable without a running service.
fn interpret_response(success: bool, body: &[u8]) -> Result<Solved, SolveError> {
    if success {
        let payload: SolvedBody =
            serde_json::from_slice(body).map_err(|_| SolveError::MalformedResponse)?;

        let solution = Grid::from_rows(payload.solution).ok_or(SolveError::MalformedResponse)?;
        let givens = payload
            .grid
            .and_then(|value| serde_json::from_value::<Vec<Vec<u8>>>(value).ok())
            .and_then(Grid::from_rows);

        Ok(Solved { solution, givens })
    } else {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(body) => Err(SolveError::Service(body.error)),
            Err(_) => Err(SolveError::Service("Failed to solve Sudoku.".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = r#"{
        "solution": [
            [5,3,4,6,7,8,9,1,2],
            [6,7,2,1,9,5,3,4,8],
            [1,9,8,3,4,2,5,6,7],
            [8,5,9,7,6,1,4,2,3],
            [4,2,6,8,5,3,7,9,1],
            [7,1,3,9,2,4,8,5,6],
            [9,6,1,5,3,7,2,8,4],
            [2,8,7,4,1,9,6,3,5],
            [3,4,5,2,8,6,1,7,9]
        ]
    }"#;

    #[test]
    fn well_formed_success_yields_the_grid() {
        let solved = interpret_response(true, SOLVED.as_bytes()).expect("should parse");
        assert_eq!(solved.solution.cell(0, 0), 5);
        assert_eq!(solved.solution.cell(8, 8), 9);
        assert!(solved.givens.is_none());
    }

    #[test]
    fn detected_givens_are_carried_along() {
        let body = format!(
            r#"{{"grid": {givens}, {rest}"#,
            givens = "[[5,3,0,0,7,0,0,0,0],[6,0,0,1,9,5,0,0,0],[0,9,8,0,0,0,0,6,0],[8,0,0,0,6,0,0,0,3],[4,0,0,8,0,3,0,0,1],[7,0,0,0,2,0,0,0,6],[0,6,0,0,0,0,2,8,0],[0,0,0,4,1,9,0,0,5],[0,0,0,0,8,0,0,7,9]]",
            rest = &SOLVED[1..],
        );

        let solved = interpret_response(true, body.as_bytes()).expect("should parse");
        let givens = solved.givens.expect("givens present");
        assert_eq!(givens.cell(0, 0), 5);
        assert_eq!(givens.cell(0, 2), 0);
    }

    #[test]
    fn malformed_givens_are_ignored_not_fatal() {
        let body = format!(r#"{{"grid": [[1,2,3]], {rest}"#, rest = &SOLVED[1..]);
        let solved = interpret_response(true, body.as_bytes()).expect("should parse");
        assert!(solved.givens.is_none());
    }

    #[test]
    fn type_mismatched_givens_are_ignored_not_fatal() {
        for givens in [r#""unreadable""#, "17", r#"[["a","b"]]"#, "null"] {
            let body = format!(r#"{{"grid": {givens}, {rest}"#, rest = &SOLVED[1..]);
            let solved = interpret_response(true, body.as_bytes()).expect("should parse");
            assert!(solved.givens.is_none(), "{givens}");
        }
    }

    #[test]
    fn success_without_a_solution_is_malformed() {
        for body in [
            "not json at all",
            r#"{"status": "ok"}"#,
            r#"{"solution": [[1,2,3]]}"#,
            r#"{"solution": "yes"}"#,
        ] {
            let result = interpret_response(true, body.as_bytes());
            assert!(matches!(result, Err(SolveError::MalformedResponse)), "{body}");
        }
    }

    #[test]
    fn service_error_message_is_surfaced_verbatim() {
        let result = interpret_response(false, br#"{"error": "Could not detect grid"}"#);
        match result {
            Err(SolveError::Service(message)) => assert_eq!(message, "Could not detect grid"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn failure_without_a_message_gets_the_generic_one() {
        let result = interpret_response(false, b"<html>502 Bad Gateway</html>");
        match result {
            Err(SolveError::Service(message)) => assert_eq!(message, "Failed to solve Sudoku."),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
