pub fn run() -> anyhow::Result<()> {
    println!("liminal {}", env!("CARGO_PKG_VERSION"));
    println!("Trigger detection and liminal exploration for conversational assistants");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
