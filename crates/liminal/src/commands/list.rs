use liminal_commands::CommandRegistry;

pub fn run(registry: &CommandRegistry, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry.all())?);
    } else {
        print!("{}", registry.help());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_both_formats() {
        let registry = CommandRegistry::with_builtins();
        assert!(run(&registry, false).is_ok());
        assert!(run(&registry, true).is_ok());
    }
}
