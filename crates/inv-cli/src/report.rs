//! 報表輸出
//!
//! 所有列表皆依ID排序，與目錄內部的註冊順序無關。

use std::io::{self, Write};

use inv_calc::ResolutionEvent;
use inv_core::{Assembly, Catalog, Quantity, ShortageList};
use rust_decimal::Decimal;

use crate::Verb;

/// 製造與補貨事件
pub fn events<W: Write>(out: &mut W, events: &[ResolutionEvent]) -> io::Result<()> {
    for event in events {
        match event {
            ResolutionEvent::Manufacture(order) => writeln!(
                out,
                ">>> make {} units of assembly {}",
                order.quantity, order.assembly_id
            )?,
            ResolutionEvent::Restock {
                assembly_id,
                quantity,
            } => writeln!(
                out,
                ">>> restocking assembly {} with {} items",
                assembly_id, quantity
            )?,
        }
    }
    Ok(())
}

/// 缺料清單（空清單不輸出）
pub fn shortages<W: Write>(out: &mut W, shortages: &ShortageList) -> io::Result<()> {
    if shortages.is_empty() {
        return Ok(());
    }

    writeln!(out, "Parts needed:")?;
    writeln!(out, "-------------")?;
    items(out, shortages.iter())
}

/// ID / 數量表格
fn items<'a, W: Write>(
    out: &mut W,
    lines: impl IntoIterator<Item = (&'a str, Quantity)>,
) -> io::Result<()> {
    writeln!(out, "{:<11} {}", "Part ID", "quantity")?;
    writeln!(out, "=========== ========")?;

    let mut empty = true;
    for (id, quantity) in lines {
        empty = false;
        writeln!(out, "{:<11} {:>8}", id, quantity)?;
    }

    if empty {
        writeln!(out, "NO PARTS")?;
    }
    Ok(())
}

/// 組件庫存總表；低於補貨門檻者以 `*` 標示
pub fn inventory<W: Write>(out: &mut W, catalog: &Catalog, threshold: Decimal) -> io::Result<()> {
    writeln!(out, "Assembly inventory:")?;
    writeln!(out, "-------------------")?;

    if catalog.assembly_count() == 0 {
        return writeln!(out, "EMPTY INVENTORY");
    }

    writeln!(out, "Assembly ID Capacity On Hand")?;
    writeln!(out, "=========== ======== =======")?;
    for assembly in catalog.sorted_assemblies() {
        let marker = if assembly.is_below_threshold(threshold) {
            "*"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<11}{:>9}{:>8}{}",
            assembly.id, assembly.capacity, assembly.on_hand, marker
        )?;
    }
    Ok(())
}

/// 單一組件明細
pub fn assembly_detail<W: Write>(out: &mut W, assembly: &Assembly) -> io::Result<()> {
    writeln!(out, "Assembly ID:\t{}", assembly.id)?;
    writeln!(out, "bin capacity:\t{}", assembly.capacity)?;
    writeln!(out, "on hand:\t{}", assembly.on_hand)?;
    writeln!(out, "Parts list:")?;
    writeln!(out, "-----------")?;
    items(out, assembly.bom.sorted())
}

/// 零件總表
pub fn parts<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "Part inventory:")?;
    writeln!(out, "---------------")?;

    if catalog.part_count() == 0 {
        return writeln!(out, "NO PARTS");
    }

    writeln!(out, "Part ID")?;
    writeln!(out, "===========")?;
    for part in catalog.sorted_parts() {
        writeln!(out, "{}", part.id)?;
    }
    Ok(())
}

/// 命令說明
pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Requests:")?;
    for verb in Verb::ALL {
        let usage = match verb {
            Verb::AddAssembly => "ID capacity [x1 n1 [x2 n2 ...]]",
            Verb::FulfillOrder => "[x1 n1 [x2 n2 ...]]",
            Verb::Stock => "ID n",
            Verb::Restock | Verb::Inventory => "[ID]",
            Verb::Empty => "ID",
            Verb::AddPart | Verb::Parts | Verb::Help | Verb::Clear | Verb::Quit => "",
        };

        if usage.is_empty() {
            writeln!(out, "\t{}", verb.name())?;
        } else {
            writeln!(out, "\t{} {}", verb.name(), usage)?;
        }
    }
    Ok(())
}
