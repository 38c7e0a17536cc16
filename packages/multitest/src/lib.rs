#[cfg(test)]
mod multitest;
