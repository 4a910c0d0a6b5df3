//! Minimal reader for the literal syntax, used to check that rendered
//! literals describe the tree they came from.

#![allow(dead_code)]

use scalarize::{Container, Key, Number, Value};

pub fn read_literal(input: &str) -> Result<Value, String> {
    let mut reader = Reader {
        chars: input.chars().collect(),
        pos: 0,
    };
    let value = reader.value()?;
    reader.skip_ws();
    if reader.pos != reader.chars.len() {
        return Err(format!("trailing input at {}", reader.pos));
    }
    Ok(value)
}

struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        let end = self.pos + token.chars().count();
        if end <= self.chars.len() && self.chars[self.pos..end].iter().copied().eq(token.chars()) {
            self.pos = end;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), String> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(format!("expected `{}` at {}", token, self.pos))
        }
    }

    fn value(&mut self) -> Result<Value, String> {
        self.skip_ws();
        match self.peek() {
            Some('[') => self.container(),
            Some('\'') => self.string().map(Value::String),
            Some(_) => self.word(),
            None => Err("unexpected end of input".to_string()),
        }
    }

    fn container(&mut self) -> Result<Value, String> {
        self.expect("[")?;
        let mut container = Container::new();
        loop {
            self.skip_ws();
            if self.eat("]") {
                return Ok(Value::Container(container));
            }
            let key = match self.peek() {
                Some('\'') => Key::Name(self.string()?),
                _ => match self.word()? {
                    Value::Number(Number::Integer(i)) => Key::Index(i),
                    other => return Err(format!("bad key {:?}", other)),
                },
            };
            self.skip_ws();
            self.expect("=>")?;
            let value = self.value()?;
            self.skip_ws();
            self.expect(",")?;
            container.insert(key, value);
        }
    }

    fn string(&mut self) -> Result<String, String> {
        self.expect("'")?;
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('\\') if matches!(self.chars.get(self.pos + 1), Some('\\') | Some('\'')) => {
                    out.push(self.chars[self.pos + 1]);
                    self.pos += 2;
                }
                Some('\'') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
                None => return Err("unterminated string".to_string()),
            }
        }
    }

    fn word(&mut self) -> Result<Value, String> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || matches!(c, '-' | '+' | '.')) {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "" => Err(format!("expected a value at {}", start)),
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "INF" => Ok(Value::from(f64::INFINITY)),
            "-INF" => Ok(Value::from(f64::NEG_INFINITY)),
            "NAN" => Ok(Value::from(f64::NAN)),
            w if w.contains(['.', 'e']) => w
                .parse::<f64>()
                .map(Value::from)
                .map_err(|e| format!("bad float `{}`: {}", w, e)),
            w => w
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| format!("bad integer `{}`: {}", w, e)),
        }
    }
}
