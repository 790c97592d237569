use crate::compiler::CompileResult;

/// Render the human-readable list of generated files, one block per
/// programming language.
pub fn format_report(result: &CompileResult) -> String {
    result
        .languages
        .iter()
        .map(|(language, output)| {
            let mut lines = vec![
                format!("Programming Language: {}", language),
                format!("Generated Code File: {}", output.code.display()),
                "Translations:".to_string(),
            ];
            lines.extend(
                output
                    .translations
                    .iter()
                    .map(|(code, path)| format!("{}: {}", code, path.display())),
            );
            format!("{}\n\n", lines.join("\n"))
        })
        .collect()
}
