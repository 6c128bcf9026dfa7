/// Interactive terminal input
///
/// Walks a user through describing a flight network: city count, city
/// names, flight count, one line per flight and the source city. Numbers
/// are re-prompted until they are positive; the rest of an offending line
/// is discarded.

use super::import::FlightNetwork;
use super::{ToolError, ToolResult};
use crate::types::FlightRecord;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::debug;

const INVALID_INTEGER: &str = "Invalid input. Please enter a positive integer.";
const INVALID_FLIGHT: &str =
    "Invalid input. Please enter positive values for cost, distance, and duration.";

/// Whitespace-token reader over a prompt/answer stream pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Collect a whole network, source city included
    pub fn read_network(&mut self) -> ToolResult<FlightNetwork> {
        let num_cities = self.read_positive_int("Enter the number of cities: ")?;

        self.say("Enter the names of the cities:\n")?;
        let mut cities = Vec::new();
        for _ in 0..num_cities {
            cities.push(self.next_token()?);
        }

        let num_flights = self.read_positive_int("Enter the number of flights: ")?;
        let mut flights = Vec::new();
        for n in 1..=num_flights {
            flights.push(self.read_flight(n)?);
        }

        self.say("Enter the source city: ")?;
        let source = self.next_token()?;

        debug!(cities = cities.len(), flights = flights.len(), %source, "network entered");
        Ok(FlightNetwork {
            cities,
            flights,
            source: Some(source),
        })
    }

    /// Prompt until a positive integer is entered
    pub fn read_positive_int(&mut self, prompt: &str) -> ToolResult<u64> {
        loop {
            self.say(prompt)?;
            let token = self.next_token()?;
            match token.parse::<u64>() {
                Ok(value) if value > 0 => return Ok(value),
                _ => self.reject(INVALID_INTEGER)?,
            }
        }
    }

    /// Prompt until a flight with positive cost, distance and duration is entered
    pub fn read_flight(&mut self, number: u64) -> ToolResult<FlightRecord> {
        loop {
            self.say(&format!(
                "Flight {number}:\n  Enter source, destination, cost (Rs), distance (km), and duration (hours): "
            ))?;
            let from = self.next_token()?;
            let to = self.next_token()?;

            match self.read_flight_numbers()? {
                Some((cost, distance, duration)) => {
                    return Ok(FlightRecord::new(from, to, cost, distance, duration))
                }
                None => self.reject(INVALID_FLIGHT)?,
            }
        }
    }

    /// Next three tokens as cost, distance and duration, all positive
    ///
    /// Stops consuming at the first token that fails, like a stream
    /// extraction would.
    fn read_flight_numbers(&mut self) -> ToolResult<Option<(u64, f64, f64)>> {
        let Some(cost) = self.next_token()?.parse::<u64>().ok().filter(|c| *c > 0) else {
            return Ok(None);
        };
        let Some(distance) = parse_positive_real(&self.next_token()?) else {
            return Ok(None);
        };
        let Some(duration) = parse_positive_real(&self.next_token()?) else {
            return Ok(None);
        };
        Ok(Some((cost, distance, duration)))
    }

    fn reject(&mut self, message: &str) -> ToolResult<()> {
        // discard whatever is left of the offending line
        self.pending.clear();
        self.say(message)?;
        self.say("\n")
    }

    fn say(&mut self, text: &str) -> ToolResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> ToolResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ToolError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn parse_positive_real(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_positive_int_reprompts() {
        let mut p = prompter("abc\n-3\n0\n4\n");
        let value = p.read_positive_int("Count: ").unwrap();

        assert_eq!(value, 4);
        let out = transcript(p);
        assert_eq!(out.matches("Count: ").count(), 4);
        assert_eq!(out.matches(INVALID_INTEGER).count(), 3);
    }

    #[test]
    fn test_invalid_rest_of_line_discarded() {
        let mut p = prompter("x 7\n5\n");
        assert_eq!(p.read_positive_int("n: ").unwrap(), 5);
    }

    #[test]
    fn test_flight_reprompts_on_non_positive() {
        let mut p = prompter("A B 0 10 1\nA B 100 -5 1\nA B 100 500 1.5\n");
        let flight = p.read_flight(1).unwrap();

        assert_eq!(flight, FlightRecord::new("A", "B", 100, 500.0, 1.5));
        let out = transcript(p);
        assert_eq!(out.matches(INVALID_FLIGHT).count(), 2);
        assert!(out.starts_with("Flight 1:\n  Enter source"));
    }

    #[test]
    fn test_read_network() {
        let mut p = prompter("3\nA B C\n2\nA B 100 500 1\nB C 50 300 0.5\nA\n");
        let network = p.read_network().unwrap();

        assert_eq!(network.cities, vec!["A", "B", "C"]);
        assert_eq!(network.flights.len(), 2);
        assert_eq!(network.flights[1], FlightRecord::new("B", "C", 50, 300.0, 0.5));
        assert_eq!(network.source.as_deref(), Some("A"));
    }

    #[test]
    fn test_unexpected_eof() {
        let mut p = prompter("2\nA\n");
        assert!(matches!(p.read_network(), Err(ToolError::UnexpectedEof)));
    }

    #[test]
    fn test_huge_counts_run_out_of_input() {
        let mut p = prompter("18446744073709551615\nA\n");
        assert!(matches!(p.read_network(), Err(ToolError::UnexpectedEof)));

        let mut p = prompter("1\nA\n18446744073709551615\nA A 1 1 1\n");
        assert!(matches!(p.read_network(), Err(ToolError::UnexpectedEof)));
    }
}
