use std::borrow::Cow;
use std::convert::TryFrom;

use beancount_core::*;
use indoc::indoc;
use proptest::prelude::*;
use rust_decimal_macros::dec;

use crate::{format_entry, print_entries, EntryPrinter, RenderError};

fn date(s: &str) -> Date {
    let mut parts = s.split('-').map(|part| part.parse::<u32>().unwrap());
    let (y, m, d) = (
        parts.next().unwrap(),
        parts.next().unwrap(),
        parts.next().unwrap(),
    );
    Date::from_ymd_opt(y as i32, m, d).unwrap()
}

fn account(name: &'static str) -> Account<'static> {
    Account::try_from(name).unwrap()
}

fn posting(name: &'static str, num: Decimal, currency: &'static str) -> Posting<'static> {
    Posting::builder()
        .account(account(name))
        .position(Position::new(Amount::new(num, currency)))
        .build()
}

fn render(directive: &Directive<'_>) -> String {
    format_entry(directive).unwrap()
}

/// A posting line: the account padded into its column, then the amount right-aligned in 16
/// columns.
fn posting_line(account: &str, amount: &str) -> String {
    format!(
        "  {}{}{}",
        account,
        " ".repeat(64 - account.len() + 1 + 16 - amount.len()),
        amount
    )
}

#[test]
fn test_close() {
    let close = Close::builder()
        .date(date("2016-11-28"))
        .account(account("Liabilities:CreditCard:CapitalOne"))
        .build();
    assert_eq!(
        render(&Directive::Close(close)),
        "2016-11-28 close Liabilities:CreditCard:CapitalOne\n"
    );
}

#[test]
fn test_balance_directive() {
    let balance = Balance::builder()
        .date(date("2014-08-09"))
        .account(account("Assets:Cash"))
        .amount(Amount::new(dec!(562.00), "USD"))
        .build();
    assert_eq!(
        render(&Directive::Balance(balance)),
        format!("2014-08-09 balance Assets:Cash{}562.00 USD\n", " ".repeat(43))
    );
}

#[test]
fn test_open_directive() {
    let open = Open::builder()
        .date(date("2014-05-01"))
        .account(account("Liabilities:CreditCard:CapitalOne"))
        .currencies(vec!["USD".into(), "CAD".into()])
        .build();
    assert_eq!(
        render(&Directive::Open(open)),
        format!(
            "2014-05-01 open Liabilities:CreditCard:CapitalOne{}USD,CAD\n",
            " ".repeat(15)
        )
    );

    let bare = Open::builder()
        .date(date("2014-05-01"))
        .account(account("Assets:Cash"))
        .build();
    assert_eq!(
        render(&Directive::Open(bare)),
        "2014-05-01 open Assets:Cash\n"
    );
}

#[test]
fn test_price_directive() {
    let price = Price::builder()
        .date(date("2014-07-09"))
        .currency("HOOL")
        .amount(Amount::new(dec!(579.18), "USD"))
        .build();
    assert_eq!(
        render(&Directive::Price(price)),
        "2014-07-09 price HOOL       579.18 USD\n"
    );
}

#[test]
fn test_text_directives() {
    let directives = vec![
        Directive::Note(
            Note::builder()
                .date(date("2014-07-09"))
                .account(account("Assets:Cash"))
                .comment("Called about \"fraud\"")
                .build(),
        ),
        Directive::Document(
            Document::builder()
                .date(date("2013-11-03"))
                .account(account("Liabilities:CreditCard"))
                .filename("/home/joe/stmts/apr-2014.pdf")
                .build(),
        ),
        Directive::Event(
            Event::builder()
                .date(date("2014-07-09"))
                .event_type("location")
                .description("Paris, France")
                .build(),
        ),
        Directive::Pad(
            Pad::builder()
                .date(date("2002-01-17"))
                .account(account("Assets:Checking"))
                .source_account(account("Equity:Opening-Balances"))
                .build(),
        ),
    ];
    let mut out = Vec::new();
    print_entries(&mut out, &directives).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        indoc! {r#"
            2014-07-09 note Assets:Cash "Called about \"fraud\""

            2013-11-03 document Liabilities:CreditCard "/home/joe/stmts/apr-2014.pdf"

            2014-07-09 event "location" "Paris, France"

            2002-01-17 pad Assets:Checking Equity:Opening-Balances

        "#}
    );
}

#[test]
fn test_transaction() {
    let txn = Transaction::builder()
        .date(date("2014-05-05"))
        .payee("Cafe Mogador")
        .narration("Lamb tagine with wine")
        .tags(vec!["trip".into()])
        .links(vec!["receipt-1".into()])
        .postings(vec![
            posting("Liabilities:CreditCard:CapitalOne", dec!(-37.45), "USD"),
            Posting::builder()
                .account(account("Expenses:Restaurant"))
                .flag(Flag::Warning)
                .build(),
        ])
        .build();
    let expected = [
        "2014-05-05 * \"Cafe Mogador\" | \"Lamb tagine with wine\" #trip ^receipt-1".to_string(),
        posting_line("Liabilities:CreditCard:CapitalOne", "-37.45 USD"),
        "  ! Expenses:Restaurant".to_string(),
        String::new(),
    ];
    assert_eq!(render(&Directive::Transaction(txn)), expected.join("\n"));
}

#[test]
fn test_payee_and_narration_slots() {
    let payee_only = Transaction::builder()
        .date(date("2014-01-01"))
        .payee("Store")
        .build();
    assert_eq!(
        render(&Directive::Transaction(payee_only)),
        "2014-01-01 * \"Store\" | \"\"\n"
    );

    let narration_only = Transaction::builder()
        .date(date("2014-01-01"))
        .narration("Groceries")
        .build();
    let rendered = render(&Directive::Transaction(narration_only));
    assert_eq!(rendered, "2014-01-01 * \"Groceries\"\n");
    assert!(!rendered.contains('|'));

    let neither = Transaction::builder()
        .date(date("2014-01-01"))
        .flag(Flag::Warning)
        .narration("")
        .build();
    assert_eq!(render(&Directive::Transaction(neither)), "2014-01-01 !\n");
}

#[test]
fn test_quotes_are_escaped() {
    let txn = Transaction::builder()
        .date(date("2014-01-01"))
        .narration(r#"Say "hi" \ bye"#)
        .build();
    assert_eq!(
        render(&Directive::Transaction(txn)),
        "2014-01-01 * \"Say \\\"hi\\\" \\\\ bye\"\n"
    );
}

#[test]
fn test_balance_column_is_all_or_nothing() {
    let plain = Transaction::builder()
        .date(date("2014-01-01"))
        .postings(vec![
            posting("Assets:Cash", dec!(10), "USD"),
            posting("Expenses:Food", dec!(-10), "USD"),
        ])
        .build();
    let rendered = render(&Directive::Transaction(plain));
    assert!(!rendered.contains(';'));

    let at_cost = Transaction::builder()
        .date(date("2014-01-01"))
        .postings(vec![
            Posting::builder()
                .account(account("Assets:Broker"))
                .position(
                    Position::builder()
                        .units(Amount::new(dec!(10), "HOOL"))
                        .cost(Cost::builder().number(dec!(2)).currency("USD").build())
                        .build(),
                )
                .build(),
            posting("Assets:Cash", dec!(-20), "USD"),
        ])
        .build();
    let rendered = render(&Directive::Transaction(at_cost));
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("10 HOOL"));
    assert!(lines[1].contains("{2 USD}"));
    assert!(lines[1].ends_with(&format!("; {:>14}", "20 USD")));
    assert!(lines[2].ends_with(&format!("; {:>14}", "0 USD")));
}

#[test]
fn test_price_is_rendered_after_cost() {
    let txn = Transaction::builder()
        .date(date("2012-11-03"))
        .narration("Transfer to account in Canada")
        .postings(vec![
            Posting::builder()
                .account(account("Assets:MyBank:Checking"))
                .position(Position::new(Amount::new(dec!(-400.00), "USD")))
                .price(Amount::new(dec!(1.09), "CAD"))
                .build(),
            posting("Assets:FR:SocGen:Checking", dec!(436.00), "CAD"),
        ])
        .build();
    let rendered = render(&Directive::Transaction(txn));
    let lines: Vec<_> = rendered.lines().collect();
    let expected = format!(
        "{} {:>16} {:>16} {:>16}",
        posting_line("Assets:MyBank:Checking", "-400.00 USD"),
        "",
        "@ 1.09 CAD",
        format!("; {:>14}", "-436.0000 CAD")
    );
    assert_eq!(lines[1], expected);
}

#[test]
fn test_max_digits() {
    let txn = Transaction::builder()
        .date(date("2014-01-01"))
        .postings(vec![posting("Assets:Cash", dec!(12.345678), "USD")])
        .build();
    let rendered = EntryPrinter::with_max_digits(2)
        .format(&Directive::Transaction(txn.clone()))
        .unwrap();
    assert!(rendered.contains(" 12.35 USD"));
    let rendered = EntryPrinter::default()
        .format(&Directive::Transaction(txn))
        .unwrap();
    assert!(rendered.contains(" 12.345678 USD"));
}

#[test]
fn test_balance_annotation_out_of_range() {
    let at_cost = Transaction::builder()
        .date(date("2014-01-01"))
        .postings(vec![Posting::builder()
            .account(account("Assets:Broker"))
            .position(
                Position::builder()
                    .units(Amount::new(dec!(100000000000000000000), "HOOL"))
                    .cost(
                        Cost::builder()
                            .number(dec!(10000000000))
                            .currency("USD")
                            .build(),
                    )
                    .build(),
            )
            .build()])
        .build();
    assert!(matches!(
        format_entry(&Directive::Transaction(at_cost)),
        Err(RenderError::Overflow(AmountOverflow))
    ));

    let converted = |num| {
        Posting::builder()
            .account(account("Assets:Cash"))
            .position(Position::new(Amount::new(num, "USD")))
            .price(Amount::new(dec!(1), "CAD"))
            .build()
    };
    let summed = Transaction::builder()
        .date(date("2014-01-01"))
        .postings(vec![converted(Decimal::MAX), converted(Decimal::MAX)])
        .build();
    assert!(matches!(
        format_entry(&Directive::Transaction(summed)),
        Err(RenderError::Overflow(AmountOverflow))
    ));
}

#[test]
fn test_unsupported() {
    assert!(matches!(
        format_entry(&Directive::Unsupported),
        Err(RenderError::UnsupportedVariant)
    ));
    let mut out = Vec::new();
    let directives = vec![Directive::Unsupported];
    assert!(print_entries(&mut out, &directives).is_err());
}

// Reading rendered text back. Only the forms the printer emits are understood.

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    Str(String),
    Cost(String),
}

fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            ';' => break,
            '"' => {
                chars.next();
                let mut s = String::new();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => s.extend(chars.next()),
                        '"' => break,
                        c => s.push(c),
                    }
                }
                tokens.push(Token::Str(s));
            }
            '{' => {
                chars.next();
                let mut s = String::new();
                let mut quoted = false;
                while let Some(c) = chars.next() {
                    match c {
                        '}' if !quoted => break,
                        '"' => {
                            quoted = !quoted;
                            s.push(c);
                        }
                        '\\' if quoted => {
                            s.push(c);
                            s.extend(chars.next());
                        }
                        c => s.push(c),
                    }
                }
                tokens.push(Token::Cost(s));
            }
            _ => {
                let mut s = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    s.push(c);
                    chars.next();
                }
                tokens.push(Token::Word(s));
            }
        }
    }
    tokens
}

fn word(token: Option<&Token>) -> &str {
    match token {
        Some(Token::Word(w)) => w,
        other => panic!("expected a word, got {:?}", other),
    }
}

fn string(token: Option<&Token>) -> &str {
    match token {
        Some(Token::Str(s)) => s,
        other => panic!("expected a string, got {:?}", other),
    }
}

fn owned(s: &str) -> Cow<'static, str> {
    Cow::Owned(s.to_string())
}

fn read_account(name: &str) -> Account<'static> {
    let parsed = Account::try_from(name).unwrap();
    Account {
        ty: parsed.ty,
        parts: parsed.parts.iter().map(|part| owned(part)).collect(),
    }
}

fn read_amount(number: &str, currency: &str) -> Amount<'static> {
    Amount::new(number.parse().unwrap(), currency.to_string())
}

/// Reads the inside of `{number currency[, date][, "label"]}`.
fn read_cost(spec: &str) -> Cost<'static> {
    let tokens = tokenize(spec);
    let mut iter = tokens.iter();
    let number: Decimal = word(iter.next()).parse().unwrap();
    let currency = word(iter.next()).trim_end_matches(',').to_string();
    let mut cost = Cost::builder().number(number).currency(currency).build();
    for token in iter {
        match token {
            Token::Word(w) => cost.date = Some(date(w.trim_end_matches(','))),
            Token::Str(label) => cost.label = Some(owned(label)),
            other => panic!("unexpected token {:?} in cost", other),
        }
    }
    cost
}

fn read_posting(line: &str) -> Posting<'static> {
    let tokens = tokenize(line);
    let mut iter = tokens.iter();
    let first = word(iter.next());
    let (flag, name) = if first.chars().all(|c| !c.is_alphanumeric()) {
        (Some(Flag::from(first.to_string())), word(iter.next()))
    } else {
        (None, first)
    };
    let mut posting = Posting::builder().account(read_account(name)).build();
    posting.flag = flag;
    while let Some(token) = iter.next() {
        match token {
            Token::Word(w) if w == "@" => {
                posting.price = Some(read_amount(word(iter.next()), word(iter.next())));
            }
            Token::Word(number) => {
                posting.position = Some(Position::new(read_amount(number, word(iter.next()))));
            }
            Token::Cost(spec) => match posting.position.as_mut() {
                Some(position) => position.cost = Some(read_cost(spec)),
                None => panic!("cost without units in {:?}", line),
            },
            Token::Str(s) => panic!("unexpected string {:?} in posting", s),
        }
    }
    posting
}

fn read_transaction(block: &str) -> Transaction<'static> {
    let mut lines = block.lines();
    let tokens = tokenize(lines.next().unwrap());
    let mut iter = tokens.iter();
    let txn_date = date(word(iter.next()));
    let flag = Flag::from(word(iter.next()).to_string());
    let mut strings = Vec::new();
    let mut bar = false;
    let mut tags = Vec::new();
    let mut links = Vec::new();
    for token in iter {
        match token {
            Token::Str(s) => strings.push(s.as_str()),
            Token::Word(w) if w == "|" => bar = true,
            Token::Word(w) if w.starts_with('#') => tags.push(owned(&w[1..])),
            Token::Word(w) if w.starts_with('^') => links.push(owned(&w[1..])),
            other => panic!("unexpected token {:?}", other),
        }
    }
    let non_empty = |s: Option<&&str>| s.filter(|s| !s.is_empty()).map(|s| owned(s));
    let (payee, narration) = if bar {
        (non_empty(strings.first()), non_empty(strings.get(1)))
    } else {
        (None, non_empty(strings.first()))
    };
    Transaction {
        date: txn_date,
        flag,
        payee,
        narration,
        tags,
        links,
        postings: lines.map(read_posting).collect(),
    }
}

/// Reads one rendered directive back.
fn read_directive(block: &str) -> Directive<'static> {
    let tokens = tokenize(block.lines().next().unwrap());
    let mut iter = tokens.iter();
    let day = date(word(iter.next()));
    match word(iter.next()) {
        "balance" => Directive::Balance(
            Balance::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .amount(read_amount(word(iter.next()), word(iter.next())))
                .build(),
        ),
        "open" => {
            let mut open = Open::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .build();
            if let Some(currencies) = iter.next() {
                open.currencies = word(Some(currencies)).split(',').map(owned).collect();
            }
            Directive::Open(open)
        }
        "close" => Directive::Close(
            Close::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .build(),
        ),
        "note" => Directive::Note(
            Note::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .comment(owned(string(iter.next())))
                .build(),
        ),
        "document" => Directive::Document(
            Document::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .filename(owned(string(iter.next())))
                .build(),
        ),
        "pad" => Directive::Pad(
            Pad::builder()
                .date(day)
                .account(read_account(word(iter.next())))
                .source_account(read_account(word(iter.next())))
                .build(),
        ),
        "price" => Directive::Price(
            Price::builder()
                .date(day)
                .currency(owned(word(iter.next())))
                .amount(read_amount(word(iter.next()), word(iter.next())))
                .build(),
        ),
        "event" => Directive::Event(
            Event::builder()
                .date(day)
                .event_type(owned(string(iter.next())))
                .description(owned(string(iter.next())))
                .build(),
        ),
        _ => Directive::Transaction(read_transaction(block)),
    }
}

/// Renders the directives, reads them back and checks nothing was lost.
fn test_conversion(directives: Vec<Directive<'_>>) -> anyhow::Result<()> {
    let mut rendered = Vec::new();
    print_entries(&mut rendered, &directives)?;
    let rendered = String::from_utf8(rendered)?;

    let read: Vec<_> = rendered
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(read_directive)
        .collect();
    assert_eq!(read, directives);
    Ok(())
}

fn held_at_cost(units: Decimal, cost: Cost<'static>) -> Posting<'static> {
    Posting::builder()
        .account(account("Assets:Broker"))
        .position(
            Position::builder()
                .units(Amount::new(units, "HOOL"))
                .cost(cost)
                .build(),
        )
        .build()
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    test_conversion(vec![
        Directive::Transaction(
            Transaction::builder()
                .date(date("2014-05-05"))
                .payee("Cafe \"Mogador\"")
                .narration("Lamb tagine with wine")
                .tags(vec!["trip".into(), "food".into()])
                .links(vec!["receipt-1".into()])
                .postings(vec![
                    posting("Liabilities:CreditCard:CapitalOne", dec!(-37.45), "USD"),
                    Posting::builder()
                        .account(account("Expenses:Restaurant"))
                        .build(),
                ])
                .build(),
        ),
        Directive::Transaction(
            Transaction::builder()
                .date(date("2014-02-11"))
                .flag(Flag::Warning)
                .payee("Broker")
                .postings(vec![
                    held_at_cost(
                        dec!(10),
                        Cost::builder()
                            .number(dec!(500.00))
                            .currency("USD")
                            .date(date("2014-02-11"))
                            .label("lot; one")
                            .build(),
                    ),
                    Posting::builder()
                        .account(account("Assets:Cash"))
                        .flag(Flag::Warning)
                        .position(Position::new(Amount::new(dec!(-5000.00), "USD")))
                        .build(),
                ])
                .build(),
        ),
        Directive::Transaction(
            Transaction::builder()
                .date(date("2012-11-03"))
                .narration("Transfer")
                .postings(vec![
                    Posting::builder()
                        .account(account("Assets:MyBank:Checking"))
                        .position(Position::new(Amount::new(dec!(-400.00), "USD")))
                        .price(Amount::new(dec!(1.09), "CAD"))
                        .build(),
                    posting("Assets:FR:SocGen:Checking", dec!(436.00), "CAD"),
                ])
                .build(),
        ),
    ])
}

#[test]
fn test_round_trip_quoted_cost_label() -> anyhow::Result<()> {
    test_conversion(vec![Directive::Transaction(
        Transaction::builder()
            .date(date("2014-02-11"))
            .narration("Buy")
            .postings(vec![
                held_at_cost(
                    dec!(2),
                    Cost::builder()
                        .number(dec!(500.00))
                        .currency("USD")
                        .label("lot \"A\", {b} \\ c")
                        .build(),
                ),
                held_at_cost(
                    dec!(1),
                    Cost::builder()
                        .number(dec!(510.00))
                        .currency("USD")
                        .date(date("2014-02-12"))
                        .label("lot \"B\"")
                        .build(),
                ),
                posting("Assets:Cash", dec!(-1510.00), "USD"),
            ])
            .build(),
    )])
}

#[test]
fn test_round_trip_directives() -> anyhow::Result<()> {
    test_conversion(vec![
        Directive::Open(
            Open::builder()
                .date(date("2014-05-01"))
                .account(account("Liabilities:CreditCard:CapitalOne"))
                .currencies(vec!["USD".into(), "CAD".into()])
                .build(),
        ),
        Directive::Open(
            Open::builder()
                .date(date("2014-05-01"))
                .account(account("Assets:Cash"))
                .build(),
        ),
        Directive::Balance(
            Balance::builder()
                .date(date("2014-08-09"))
                .account(account("Assets:Cash"))
                .amount(Amount::new(dec!(-562.00), "USD"))
                .build(),
        ),
        Directive::Close(
            Close::builder()
                .date(date("2016-11-28"))
                .account(account("Liabilities:CreditCard:CapitalOne"))
                .build(),
        ),
        Directive::Note(
            Note::builder()
                .date(date("2014-07-09"))
                .account(account("Assets:Cash"))
                .comment("Called about \"fraud\"; again")
                .build(),
        ),
        Directive::Document(
            Document::builder()
                .date(date("2013-11-03"))
                .account(account("Liabilities:CreditCard"))
                .filename("C:\\stmts\\\"apr\" 2014.pdf")
                .build(),
        ),
        Directive::Pad(
            Pad::builder()
                .date(date("2002-01-17"))
                .account(account("Assets:Checking"))
                .source_account(account("Equity:Opening-Balances"))
                .build(),
        ),
        Directive::Price(
            Price::builder()
                .date(date("2014-07-09"))
                .currency("HOOL")
                .amount(Amount::new(dec!(579.18), "USD"))
                .build(),
        ),
        Directive::Event(
            Event::builder()
                .date(date("2014-07-09"))
                .event_type("location")
                .description("Paris, \"France\"")
                .build(),
        ),
    ])
}

fn arb_transaction() -> impl Strategy<Value = Transaction<'static>> {
    let arb_posting = (
        any::<i64>(),
        0u32..12,
        prop::sample::select(vec!["USD", "CAD", "HOOL"]),
        prop::option::of((1i64..100_000, 0u32..4)),
    )
        .prop_map(|(mantissa, scale, currency, price)| {
            let posting = Posting::builder()
                .account(account("Assets:Cash"))
                .position(Position::new(Amount::new(
                    Decimal::new(mantissa, scale),
                    currency,
                )))
                .build();
            match price {
                Some((mantissa, scale)) => Posting {
                    price: Some(Amount::new(Decimal::new(mantissa, scale), "EUR")),
                    ..posting
                },
                None => posting,
            }
        });
    (
        prop::option::of("[a-zA-Z \"\\\\]{1,12}"),
        prop::collection::vec(arb_posting, 0..4),
    )
        .prop_map(|(narration, postings)| {
            let txn = Transaction::builder()
                .date(date("2020-02-29"))
                .postings(postings)
                .build();
            Transaction {
                narration: narration.map(Into::into),
                ..txn
            }
        })
}

fn fractional_digits(number: &str) -> usize {
    number.split('.').nth(1).map_or(0, str::len)
}

proptest! {
    #[test]
    fn prop_rendering_is_deterministic(txn in arb_transaction()) {
        let directive = Directive::Transaction(txn);
        prop_assert_eq!(render(&directive), render(&directive));
    }

    #[test]
    fn prop_max_digits_bounds_every_number(txn in arb_transaction(), max_digits in 0u32..10) {
        let rendered = EntryPrinter::with_max_digits(max_digits)
            .format(&Directive::Transaction(txn))
            .unwrap();
        for line in rendered.lines().skip(1) {
            for token in line.split(|c: char| c.is_whitespace() || c == ',' || c == ';') {
                if token.parse::<Decimal>().is_ok() {
                    prop_assert!(fractional_digits(token) <= max_digits as usize, "{}", line);
                }
            }
        }
    }

    #[test]
    fn prop_round_trip(txn in arb_transaction()) {
        let directive = Directive::Transaction(txn);
        // enough digits for every generated number
        let rendered = EntryPrinter::with_max_digits(16).format(&directive).unwrap();
        prop_assert_eq!(read_directive(&rendered), directive);
    }
}
