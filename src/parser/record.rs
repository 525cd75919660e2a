use crate::domain::{MIN_VERTICES, Point, Polygon};
use crate::error::ParseError;

/// Parse a single `(x;y)` token
pub fn parse_point(token: &str) -> Result<Point, ParseError> {
    let malformed = || ParseError::MalformedPoint(token.to_string());

    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(malformed)?;
    let (x, y) = inner.split_once(';').ok_or_else(malformed)?;
    let x = x.parse().map_err(|_| malformed())?;
    let y = y.parse().map_err(|_| malformed())?;

    Ok(Point::new(x, y))
}

/// Parse a polygon from whitespace-separated tokens
///
/// # Algorithm
/// 1. First token is the vertex count N (unsigned, at least 3)
/// 2. The next N tokens must each be a point
/// 3. Every token is consumed: anything after the N-th point rejects the
///    polygon, as does running out of tokens early
pub fn parse_polygon<'a, I>(tokens: I) -> Result<Polygon, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();

    let count_token = tokens.next().ok_or(ParseError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| ParseError::InvalidCount(count_token.to_string()))?;
    if count < MIN_VERTICES {
        return Err(ParseError::TooFewVertices {
            count,
            min: MIN_VERTICES,
        });
    }

    // count is untrusted, so let the vector grow with the points actually present
    let mut points = Vec::new();
    for token in tokens.by_ref().take(count) {
        points.push(parse_point(token)?);
    }
    if points.len() < count {
        return Err(ParseError::MissingPoints {
            expected: count,
            found: points.len(),
        });
    }
    if let Some(extra) = tokens.next() {
        return Err(ParseError::SurplusPoints {
            expected: count,
            token: extra.to_string(),
        });
    }

    Polygon::new(points).ok_or(ParseError::TooFewVertices {
        count,
        min: MIN_VERTICES,
    })
}

/// Parse one line of a polygon file
pub fn parse_record(line: &str) -> Result<Polygon, ParseError> {
    parse_polygon(line.split_whitespace())
}
