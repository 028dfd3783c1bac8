use super::graph::Graph;
use super::player::Player;
use super::vertex::Vertex;
use anyhow::bail;
use anyhow::Context;
use std::str::FromStr;

/// parsing of the benchmark corpus format. the first line is a header
/// `parity N;` naming the highest vertex index; each following line is
/// `v p o s1, s2, ..., sk;` with owner digit 1 for One and 0 for Two.
/// tokens may be separated by any mix of spaces, commas and semicolons;
/// prose lines before the first vertex declaration are skipped, as is a
/// trailing blank line. rejection (caps, sinks, malformed numbers) is an
/// error: the harness skips the file and moves on.
impl FromStr for Graph {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> anyhow::Result<Self> {
        let mut lines = text.lines();
        let header = lines.next().context("empty game file")?;
        let n = 1 + top_index(header)?;
        if n > crate::MAX_VERTICES {
            bail!("{} vertices, cap is {}", n, crate::MAX_VERTICES);
        }
        let mut rows: Vec<Option<Vertex>> = vec![None; n];
        for line in lines {
            let mut tokens = line
                .split([' ', ',', ';', '\t', '\r'])
                .filter(|token| !token.is_empty());
            let Some(first) = tokens.next() else {
                continue;
            };
            let Ok(v) = first.parse::<usize>() else {
                continue;
            };
            if v >= n {
                bail!("vertex {} out of range 0..{}", v, n);
            }
            let priority = tokens
                .next()
                .with_context(|| format!("vertex {} missing priority", v))?
                .parse::<usize>()
                .with_context(|| format!("vertex {} priority", v))?;
            if priority > crate::MAX_PRIORITY {
                bail!("priority {}, cap is {}", priority, crate::MAX_PRIORITY);
            }
            let owner = match tokens
                .next()
                .with_context(|| format!("vertex {} missing owner", v))?
            {
                "1" => Player::One,
                "0" => Player::Two,
                digit => bail!("vertex {} owner digit {:?}", v, digit),
            };
            let mut vertex = Vertex::new(owner, priority);
            for token in tokens {
                let u = token
                    .parse::<usize>()
                    .with_context(|| format!("vertex {} successor", v))?;
                if u >= n {
                    bail!("edge ({}, {}) out of range 0..{}", v, u, n);
                }
                vertex.attach(u);
            }
            if vertex.degree() == 0 {
                bail!("vertex {} is a sink", v);
            }
            rows[v] = Some(vertex);
        }
        let vertices = rows
            .into_iter()
            .enumerate()
            .map(|(v, row)| row.with_context(|| format!("vertex {} never declared", v)))
            .collect::<anyhow::Result<Vec<Vertex>>>()?;
        Ok(Graph::new(vertices))
    }
}

/// the header names the highest vertex index; the leading keyword is not
/// inspected
fn top_index(header: &str) -> anyhow::Result<usize> {
    let mut tokens = header
        .split([' ', ';', '\t', '\r'])
        .filter(|token| !token.is_empty());
    tokens.next().context("blank header line")?;
    tokens
        .next()
        .context("header missing vertex count")?
        .parse::<usize>()
        .context("header vertex count")
}
