use anyhow::Result;

fn main() -> Result<()> {
    tablecheck::command_line::procedures::main()
}
