use rexp::{rexp, rexp_with, Matching};

fn main() -> Result<(), rexp::Error> {
    let m = rexp(r"^(`d{4})-(`d`d)-(`d`d)$")?.match_first("2000-12-31").unwrap();
    assert_eq!(m.groups().collect::<Vec<_>>(), [Some("2000"), Some("12"), Some("31")]);

    let re = rexp(r"(`d+)")?;
    for m in re.match_all("2000-12-31") {
        println!("{:?} at {:?}", m.get(1), m.span(1));
    }
    assert_eq!(re.gsub("2000-12-31", "<$1>")?, "<2000>-<12>-<31>");
    assert_eq!(
        re.sub_n_with("2000-12-31", 2, |m| (m.parse::<u32>(1).unwrap().unwrap() + 1).to_string()),
        "2001-13-31"
    );

    let re = rexp_with(r"^`.(jpg|png|gif)$").flags("i").call()?;
    assert!(re.is_match(".PNG"));

    let mut m = Matching::new("12/31/2014");
    if m.anchored(r"^(`d{4})-(`d`d)-(`d`d)$").call()? {
        println!("ymd: {:?}", m.groups());
    } else if m.anchored(r"^(`d`d)/(`d`d)/(`d{4})$").call()? {
        println!("mdy: {:?}", m.groups());
    }
    Ok(())
}
