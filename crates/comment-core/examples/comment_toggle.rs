use comment_core::{CommentCommand, CommentConfig, EditorState, Region, SelectionSet};

fn main() {
    let config = CommentConfig::line_and_block("//", "/*", "*/");

    // Toggle line comments on the line containing the caret.
    let mut state = EditorState::new(
        "fn main() {\n    println!(\"hi\");\n}\n",
        SelectionSet::single(Region::caret(16)),
    );
    state.execute(CommentCommand::ToggleLineComment, &config);
    assert_eq!(
        state.document().get_text(),
        "fn main() {\n    // println!(\"hi\");\n}\n"
    );

    // Wrap a selection in a block comment, then unwrap it again.
    let mut state = EditorState::new(
        "let x = 1;",
        SelectionSet::single(Region::new(8, 9)),
    );
    state.execute(CommentCommand::ToggleBlockComment, &config);
    assert_eq!(state.document().get_text(), "let x = /* 1 */;");

    state.execute(CommentCommand::ToggleBlockComment, &config);
    assert_eq!(state.document().get_text(), "let x = 1;");

    println!("comment toggling round-tripped cleanly");
}
