/// Join `host` and `segments` into `https://<host>/<segments...>`.
///
/// Empty segments are skipped and surrounding slashes trimmed, so an empty
/// list yields the API root (`https://<host>/`).
pub fn build_url(host: &str, segments: &[&str]) -> String {
    let path = segments
        .iter()
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("https://{host}/{path}")
}

/// Append `params` to the URL as `?k=v&k=v...`.
///
/// Keys and values are concatenated verbatim. Nothing is percent-encoded;
/// callers pass values that are already safe to embed.
pub fn build_url_with_parameters(
    host: &str,
    segments: &[&str],
    params: &[(String, String)],
) -> String {
    let mut url = build_url(host, segments);
    for (idx, (key, value)) in params.iter().enumerate() {
        url.push(if idx == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn build_url_targets_api_root_without_segments() {
        assert_eq!(
            build_url("redditsmm.com/api/v2", &[]),
            "https://redditsmm.com/api/v2/"
        );
    }

    #[test]
    fn build_url_joins_segments() {
        assert_eq!(
            build_url("example.com", &["api", "/v2/", "", "orders"]),
            "https://example.com/api/v2/orders"
        );
    }

    #[test]
    fn first_separator_is_question_mark_and_rest_are_ampersands() {
        for len in 1..=5 {
            let pairs = (0..len)
                .map(|idx| (format!("k{idx}"), format!("v{idx}")))
                .collect::<Vec<_>>();
            let url = build_url_with_parameters("example.com", &[], &pairs);
            let query = url
                .strip_prefix("https://example.com/")
                .expect("url keeps the root prefix");

            assert!(query.starts_with('?'), "{url}");
            assert_eq!(query.matches('?').count(), 1, "{url}");
            assert_eq!(query.matches('&').count(), len - 1, "{url}");
        }
    }

    #[test]
    fn parameters_are_not_percent_encoded() {
        let url = build_url_with_parameters(
            "example.com",
            &[],
            &params(&[
                ("action", "add"),
                ("link", "https://reddit.com/r/rust?x=1"),
                ("orders", "1,2"),
            ]),
        );
        assert_eq!(
            url,
            "https://example.com/?action=add&link=https://reddit.com/r/rust?x=1&orders=1,2"
        );
    }

    #[test]
    fn no_parameters_leaves_url_untouched() {
        assert_eq!(
            build_url_with_parameters("example.com", &["api"], &[]),
            "https://example.com/api"
        );
    }
}
