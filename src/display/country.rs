//! Country information display

use crate::models::CountryInfo;

/// Format country details as a labelled block
pub fn format_country_info(info: &CountryInfo) -> String {
    let mut output = String::new();

    output.push_str(&format!("Country: {}\n", info.name));
    output.push_str(&format!("  Capital:    {}\n", info.capital));
    output.push_str(&format!("  Currency:   {}\n", info.currency));
    output.push_str(&format!("  Region:     {}\n", info.region));
    output.push_str(&format!(
        "  Population: {}\n",
        group_thousands(info.population)
    ));

    if !info.languages.is_empty() {
        output.push_str(&format!("  Languages:  {}\n", info.languages.join(", ")));
    }
    if !info.flag.is_empty() {
        output.push_str(&format!("  Flag:       {}\n", info.flag));
    }

    output
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
