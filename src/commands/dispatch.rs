use super::{AreaQuery, Command, Extremum, Measure, VertexFilter};
use crate::domain::MIN_VERTICES;
use crate::error::CommandError;
use crate::parser::parse_polygon;

/// Parse one command line into a [`Command`]
///
/// The first token selects the command; the rest of the line holds its
/// arguments. Tokens after a complete keyword argument are ignored, while a
/// polygon literal must use up the rest of the line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens
        .next()
        .ok_or_else(|| CommandError::InvalidCommand(String::new()))?;

    match keyword {
        "AREA" => parse_area(tokens.next()).map(Command::Area),
        "MAX" => parse_measure(tokens.next()).map(|m| Command::Extremum(Extremum::Max, m)),
        "MIN" => parse_measure(tokens.next()).map(|m| Command::Extremum(Extremum::Min, m)),
        "COUNT" => parse_filter(tokens.next()).map(Command::Count),
        "RMECHO" | "ECHO" => Ok(Command::Echo(parse_polygon(tokens)?)),
        "INTERSECTIONS" => Ok(Command::Intersections(parse_polygon(tokens)?)),
        "RIGHTSHAPES" => Ok(Command::RightShapes),
        other => Err(CommandError::InvalidCommand(other.to_string())),
    }
}

fn parse_area(arg: Option<&str>) -> Result<AreaQuery, CommandError> {
    match arg {
        Some("MEAN") => Ok(AreaQuery::Mean),
        other => parse_filter(other).map(AreaQuery::Sum),
    }
}

fn parse_filter(arg: Option<&str>) -> Result<VertexFilter, CommandError> {
    match arg {
        Some("EVEN") => Ok(VertexFilter::Even),
        Some("ODD") => Ok(VertexFilter::Odd),
        Some(token) => parse_vertex_count(token).map(VertexFilter::Exactly),
        None => Err(missing_argument()),
    }
}

fn parse_vertex_count(token: &str) -> Result<usize, CommandError> {
    let count: usize = token
        .parse()
        .map_err(|_| CommandError::InvalidArgument(format!("unknown argument {:?}", token)))?;
    if count < MIN_VERTICES {
        return Err(CommandError::InvalidArgument(format!(
            "vertex count {} is below {}",
            count, MIN_VERTICES
        )));
    }
    Ok(count)
}

fn parse_measure(arg: Option<&str>) -> Result<Measure, CommandError> {
    match arg {
        Some("AREA") => Ok(Measure::Area),
        Some("VERTEXES") => Ok(Measure::Vertexes),
        Some(other) => Err(CommandError::InvalidArgument(format!(
            "unknown argument {:?}",
            other
        ))),
        None => Err(missing_argument()),
    }
}

fn missing_argument() -> CommandError {
    CommandError::InvalidArgument("missing argument".to_string())
}
