//! 命令解析

use inv_core::Quantity;

use crate::CommandError;

/// 命令動詞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    AddPart,
    AddAssembly,
    FulfillOrder,
    Stock,
    Restock,
    Empty,
    Inventory,
    Parts,
    Help,
    Clear,
    Quit,
}

impl Verb {
    /// 命令表（縮寫比對依此順序）
    pub const ALL: [Verb; 11] = [
        Verb::AddPart,
        Verb::AddAssembly,
        Verb::FulfillOrder,
        Verb::Stock,
        Verb::Restock,
        Verb::Empty,
        Verb::Inventory,
        Verb::Parts,
        Verb::Help,
        Verb::Clear,
        Verb::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::AddPart => "addPart",
            Verb::AddAssembly => "addAssembly",
            Verb::FulfillOrder => "fulfillOrder",
            Verb::Stock => "stock",
            Verb::Restock => "restock",
            Verb::Empty => "empty",
            Verb::Inventory => "inventory",
            Verb::Parts => "parts",
            Verb::Help => "help",
            Verb::Clear => "clear",
            Verb::Quit => "quit",
        }
    }

    /// 查詢動詞；`abbreviated` 時任一前綴皆可，取命令表中第一個符合者
    pub fn lookup(token: &str, abbreviated: bool) -> Option<Verb> {
        if token.is_empty() {
            return None;
        }

        Self::ALL.into_iter().find(|verb| {
            if abbreviated {
                verb.name().starts_with(token)
            } else {
                verb.name() == token
            }
        })
    }
}

/// 已解析的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPart {
        id: String,
    },
    AddAssembly {
        id: String,
        capacity: Quantity,
        components: Vec<ComponentLine>,
    },
    FulfillOrder {
        lines: Vec<(String, Quantity)>,
    },
    Stock {
        id: String,
        quantity: Quantity,
    },
    Restock {
        id: Option<String>,
    },
    Empty {
        id: String,
    },
    Inventory {
        id: Option<String>,
    },
    Parts,
    Help,
    Clear,
    Quit,
}

impl Command {
    /// 由動詞與參數建立命令；數值參數依 [`parse_quantity`] 解析
    pub fn parse(verb: Verb, args: &[&str]) -> Result<Self, CommandError> {
        let required = |index: usize, argument: &'static str| {
            args.get(index)
                .map(|arg| arg.to_string())
                .ok_or(CommandError::MissingArgument {
                    command: verb.name(),
                    argument,
                })
        };

        let max_args = match verb {
            Verb::AddAssembly | Verb::FulfillOrder => usize::MAX,
            Verb::Stock => 2,
            Verb::AddPart | Verb::Restock | Verb::Empty | Verb::Inventory => 1,
            Verb::Parts | Verb::Help | Verb::Clear | Verb::Quit => 0,
        };
        if args.len() > max_args {
            return Err(CommandError::TooManyArguments(verb.name()));
        }

        let command = match verb {
            Verb::AddPart => Command::AddPart {
                id: required(0, "ID")?,
            },
            Verb::AddAssembly => Command::AddAssembly {
                id: required(0, "ID")?,
                capacity: parse_quantity(&required(1, "capacity")?),
                components: component_lines(&args[2..]),
            },
            Verb::FulfillOrder => {
                required(0, "ID")?;
                Command::FulfillOrder { lines: pairs(args) }
            }
            Verb::Stock => Command::Stock {
                id: required(0, "ID")?,
                quantity: parse_quantity(&required(1, "quantity")?),
            },
            Verb::Restock => Command::Restock {
                id: args.first().map(|arg| arg.to_string()),
            },
            Verb::Empty => Command::Empty {
                id: required(0, "ID")?,
            },
            Verb::Inventory => Command::Inventory {
                id: args.first().map(|arg| arg.to_string()),
            },
            Verb::Parts => Command::Parts,
            Verb::Help => Command::Help,
            Verb::Clear => Command::Clear,
            Verb::Quit => Command::Quit,
        };

        Ok(command)
    }
}

/// `addAssembly` 的子件行；保留數量原文，錯誤訊息照輸入輸出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLine {
    pub id: String,
    pub quantity: Quantity,
    pub token: String,
}

fn component_lines(args: &[&str]) -> Vec<ComponentLine> {
    args.chunks(2)
        .map(|pair| {
            let token = pair.get(1).copied().unwrap_or("0");
            ComponentLine {
                id: pair[0].to_string(),
                quantity: parse_quantity(token),
                token: token.to_string(),
            }
        })
        .collect()
}

/// 將 `id qty id qty ...` 轉為配對；缺少數量的最後一個ID視為數量 0
fn pairs(args: &[&str]) -> Vec<(String, Quantity)> {
    args.chunks(2)
        .map(|pair| {
            let quantity = pair.get(1).map(|qty| parse_quantity(qty)).unwrap_or(0);
            (pair[0].to_string(), quantity)
        })
        .collect()
}

/// 將一行拆成詞；以 `#` 開頭的詞之後皆為註解
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|token| !token.starts_with('#'))
        .collect()
}

/// 解析數量，規則同 C 的 `strtol`
///
/// 可選的正負號後取最長的十進位數字前綴；沒有數字時為 0，溢位時飽和。
/// 非法數量交由後續的 `<= 0` 檢查處理。
pub fn parse_quantity(token: &str) -> Quantity {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0 as Quantity, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(Quantity::from(digit - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}
