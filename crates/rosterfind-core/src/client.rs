// crates/rosterfind-core/src/client.rs
#![cfg(feature = "client")]

use crate::error::Result;
use crate::probe::{ProbeResult, ProbeSource};
use regex::Regex;
use std::time::Duration;

/// How to reach the roster and how to read its pages.
///
/// The roster exposes records through an opaque form: post a numeric key,
/// get an HTML page back. Which cells hold the name and the displayed ID
/// varies per deployment, so both are configured as regex capture
/// patterns (group 1 is the value).
#[derive(Debug, Clone)]
pub struct HttpProbeConfig {
    /// Form endpoint.
    pub url: String,
    /// Form field the key is posted under.
    pub key_field: String,
    /// Pattern capturing the record's display name.
    pub name_pattern: String,
    /// Pattern capturing the displayed ID. When it misses, the probed
    /// key is used as the display key.
    pub display_key_pattern: String,
    /// Bound on one round trip; a timeout surfaces as a probe failure,
    /// never a stall.
    pub timeout: Duration,
}

impl HttpProbeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        HttpProbeConfig {
            url: url.into(),
            key_field: "student_id".into(),
            name_pattern: r"<th[^>]*>\s*([^<]+?)\s*</th>".into(),
            display_key_pattern: r"<td[^>]*>\s*(\d+)\s*</td>".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Blocking HTTP probe source. One instance is one sequential session;
/// it is intentionally not shareable across threads mid-search.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
    config: HttpProbeConfig,
    name_re: Regex,
    display_key_re: Regex,
}

impl HttpProbe {
    pub fn new(config: HttpProbeConfig) -> Result<Self> {
        let name_re = Regex::new(&config.name_pattern)?;
        let display_key_re = Regex::new(&config.display_key_pattern)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(HttpProbe {
            client,
            config,
            name_re,
            display_key_re,
        })
    }

    /// Extract a record from a response body. A page where the name
    /// pattern misses, or captures only whitespace, is an empty slot:
    /// that is how the roster renders "no record at this key".
    fn parse_body(&self, key: u32, body: &str) -> ProbeResult {
        let name = self
            .name_re
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|n| !n.is_empty());

        match name {
            Some(name) => {
                let display_key = self
                    .display_key_re
                    .captures(body)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_else(|| key.to_string());
                ProbeResult::record(name, display_key)
            }
            None => ProbeResult::Empty,
        }
    }
}

impl ProbeSource for HttpProbe {
    fn probe(&mut self, key: u32) -> Result<ProbeResult> {
        tracing::debug!(key, url = %self.config.url, "probing roster");
        let response = self
            .client
            .post(&self.config.url)
            .form(&[(self.config.key_field.as_str(), key.to_string())])
            .send()?
            .error_for_status()?;
        let body = response.text()?;
        Ok(self.parse_body(key, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RosterRecord;

    fn probe() -> HttpProbe {
        HttpProbe::new(HttpProbeConfig::new("http://localhost/lookup")).unwrap()
    }

    const HIT: &str = r#"
        <div id="rsval"><table>
            <tr><td>Result</td></tr>
            <tr><th> احمد علي حسن </th></tr>
            <tr><td>ID</td><td> 45120 </td></tr>
        </table></div>"#;

    #[test]
    fn extracts_name_and_display_key() {
        let result = probe().parse_body(45_060, HIT);
        assert_eq!(
            result,
            ProbeResult::Record(RosterRecord {
                raw_name: "احمد علي حسن".into(),
                display_key: "45120".into(),
            })
        );
    }

    #[test]
    fn pattern_miss_is_an_empty_slot() {
        let body = "<div id=\"rsval\">no matching record</div>";
        assert_eq!(probe().parse_body(45_060, body), ProbeResult::Empty);
    }

    #[test]
    fn whitespace_only_name_is_an_empty_slot() {
        let body = "<table><tr><th>   </th></tr></table>";
        assert_eq!(probe().parse_body(45_060, body), ProbeResult::Empty);
    }

    #[test]
    fn probed_key_backfills_a_missing_display_key() {
        let body = "<table><tr><th>باسم عمر</th></tr></table>";
        match probe().parse_body(45_060, body) {
            ProbeResult::Record(record) => assert_eq!(record.display_key, "45060"),
            other => panic!("expected a record, got {other:?}"),
        }
    }
}
