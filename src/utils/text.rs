//! Small string helpers shared by the region and operation catalogues.

/// Levenshtein edit distance, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=a.len()).collect();
    let mut current = vec![0; a.len() + 1];

    for (i, cb) in b.iter().enumerate() {
        current[0] = i + 1;
        for (j, ca) in a.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[a.len()]
}

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `ListBuckets` / `listBuckets` -> `list-buckets`. Every uppercase letter
/// after the first char starts a new segment.
pub fn pascal_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `list-buckets` -> `ListBuckets`
pub fn kebab_to_pascal(s: &str) -> String {
    s.split('-').map(upper_first).collect()
}

/// Keeps ASCII letters and digits only.
pub fn alphanumeric_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Escapes text for use inside HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("us-west-2", "us-west-1"), 1);
        assert_eq!(levenshtein("us-wst-2", "us-west-2"), 1);
        assert_eq!(levenshtein("list-bucket", "list-buckets"), 1);
    }

    #[test]
    fn test_case_conversions() {
        assert_eq!(pascal_to_kebab("ListBuckets"), "list-buckets");
        assert_eq!(pascal_to_kebab("listBuckets"), "list-buckets");
        assert_eq!(pascal_to_kebab("DescribeDBInstances"), "describe-d-b-instances");
        assert_eq!(kebab_to_pascal("describe-d-b-instances"), "DescribeDBInstances");
        assert_eq!(kebab_to_pascal("list-buckets"), "ListBuckets");
        assert_eq!(lower_first("ListBuckets"), "listBuckets");
        assert_eq!(upper_first("s3"), "S3");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_alphanumeric_only() {
        assert_eq!(alphanumeric_only("my-repro_app 2"), "myreproapp2");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain-name"), "plain-name");
        assert_eq!(
            escape_html("<b>Tom & \"Jerry's\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }
}
