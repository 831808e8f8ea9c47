use colored::Colorize;
use creational_patterns::builder::ComputerBuilder;
use creational_patterns::Build;

fn main() {
    let gaming = ComputerBuilder::new()
        .cpu("Intel i9")
        .ram("32GB")
        .storage("1TB SSD")
        .gpu("RTX 3080")
        .build();

    let office = ComputerBuilder::new().cpu("Intel i5").ram("16GB").build();

    for (title, computer) in [("Gaming computer", gaming), ("Office computer", office)] {
        println!("{}", title.bold());
        match computer {
            Ok(computer) => computer.display_configuration(),
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
        println!();
    }
}
