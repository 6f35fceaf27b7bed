use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{validate_numbers, Draw, GAME_SIZE};
use crate::session::LotteryData;

pub const LOTOFACIL_URL: &str = "https://loteriascaixa-api.herokuapp.com/api/lotofacil";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("falha de rede ao consultar resultados: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("resposta HTTP inesperada: {0}")]
    Status(reqwest::StatusCode),

    #[error("dados de sorteio inválidos: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct ApiDraw {
    concurso: u32,
    #[serde(default)]
    data: Option<String>,
    dezenas: Vec<String>,
    #[serde(rename = "valorEstimadoProximoConcurso", default)]
    next_prize: Option<f64>,
}

/// Um GET com timeout contra o endpoint de resultados. Qualquer falha vira um
/// `FetchError`; não há retry automático nem cache em disco.
pub fn fetch_history(url: &str) -> Result<LotteryData, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text()?;
    parse_payload(&body)
}

/// Normaliza o payload JSON do endpoint. `records[0]` é o concurso mais
/// recente; dele saem o número do concurso e a estimativa de prêmio.
pub fn parse_payload(body: &str) -> Result<LotteryData, FetchError> {
    let records: Vec<ApiDraw> =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if records.is_empty() {
        return Err(FetchError::Malformed("histórico vazio".to_string()));
    }

    let contest = records[0].concurso;
    let next_prize = records[0].next_prize;

    let mut draws = Vec::with_capacity(records.len());
    for record in records {
        draws.push(parse_record(record)?);
    }

    Ok(LotteryData {
        draws,
        contest,
        next_prize,
    })
}

fn parse_record(record: ApiDraw) -> Result<Draw, FetchError> {
    if record.dezenas.len() != GAME_SIZE {
        return Err(FetchError::Malformed(format!(
            "concurso {} com {} dezenas",
            record.concurso,
            record.dezenas.len()
        )));
    }

    let mut numbers = [0u8; GAME_SIZE];
    for (slot, digit) in numbers.iter_mut().zip(&record.dezenas) {
        *slot = digit
            .trim()
            .parse::<u8>()
            .map_err(|_| FetchError::Malformed(format!("dezena inválida: '{}'", digit)))?;
    }
    numbers.sort();
    validate_numbers(&numbers).map_err(|e| FetchError::Malformed(e.to_string()))?;

    Ok(Draw {
        contest: record.concurso,
        date: record.data.unwrap_or_default(),
        numbers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(records: &[&str]) -> String {
        format!("[{}]", records.join(","))
    }

    fn record(contest: u32, dezenas: &str) -> String {
        format!(
            r#"{{"concurso": {}, "data": "06/08/2026", "dezenas": [{}], "valorEstimadoProximoConcurso": 1700000.0}}"#,
            contest, dezenas
        )
    }

    const DEZENAS_OK: &str =
        r#""01","02","03","04","05","06","07","08","09","10","11","12","13","14","15""#;

    #[test]
    fn test_parse_payload_ok() {
        let body = payload(&[&record(3000, DEZENAS_OK), &record(2999, DEZENAS_OK)]);
        let data = parse_payload(&body).unwrap();
        assert_eq!(data.contest, 3000);
        assert_eq!(data.next_prize, Some(1_700_000.0));
        assert_eq!(data.draws.len(), 2);
        assert_eq!(data.last_draw().unwrap().contest, 3000);
        assert_eq!(
            data.draws[0].numbers,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    fn test_parse_payload_sorts_numbers() {
        let dezenas =
            r#""15","14","13","12","11","10","09","08","07","06","05","04","03","02","01""#;
        let body = payload(&[&record(3000, dezenas)]);
        let data = parse_payload(&body).unwrap();
        let numbers = data.draws[0].numbers;
        for w in numbers.windows(2) {
            assert!(w[0] < w[1], "dezenas fora de ordem: {:?}", numbers);
        }
    }

    #[test]
    fn test_parse_payload_empty_history() {
        assert!(matches!(
            parse_payload("[]"),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_payload_not_json() {
        assert!(matches!(
            parse_payload("<html>erro</html>"),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_payload_wrong_digit_count() {
        let body = payload(&[&record(3000, r#""01","02","03""#)]);
        assert!(matches!(parse_payload(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_payload_bad_digit() {
        let dezenas =
            r#""01","02","03","04","05","06","07","08","09","10","11","12","13","14","xx""#;
        let body = payload(&[&record(3000, dezenas)]);
        assert!(matches!(parse_payload(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_payload_out_of_range_digit() {
        let dezenas =
            r#""01","02","03","04","05","06","07","08","09","10","11","12","13","14","26""#;
        let body = payload(&[&record(3000, dezenas)]);
        assert!(matches!(parse_payload(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_payload_duplicate_digit() {
        let dezenas =
            r#""01","01","03","04","05","06","07","08","09","10","11","12","13","14","15""#;
        let body = payload(&[&record(3000, dezenas)]);
        assert!(matches!(parse_payload(&body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_payload_missing_prize_is_none() {
        let body = format!(
            r#"[{{"concurso": 3000, "dezenas": [{}]}}]"#,
            DEZENAS_OK
        );
        let data = parse_payload(&body).unwrap();
        assert_eq!(data.next_prize, None);
        assert_eq!(data.draws[0].date, "");
    }
}
