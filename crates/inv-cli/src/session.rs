//! 命令迴圈
//!
//! 一行一個命令，執行完畢（含全部遞迴展開）後才讀下一行。
//! 正常輸出寫入 `out`，錯誤以 `!!! ` 前綴寫入 `err`，任何錯誤都不會中止迴圈。

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use inv_calc::{DemandResolver, Resolution, RestockTarget};
use inv_core::{BillOfMaterials, Catalog, InventoryConfig, InventoryError, ItemKind, Quantity};

use crate::command::{tokenize, Command, ComponentLine, Verb};
use crate::{report, CommandError};

/// 命令執行後的流程控制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 命令迴圈：擁有目錄的生命週期
pub struct Session<W: Write, E: Write> {
    catalog: Catalog,
    resolver: DemandResolver,
    config: InventoryConfig,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Session<W, E> {
    /// 創建新的命令迴圈，目錄為空
    pub fn new(config: InventoryConfig, out: W, err: E) -> Self {
        Self {
            catalog: Catalog::new(),
            resolver: DemandResolver::new(&config),
            config,
            out,
            err,
        }
    }

    /// 讀取並執行所有命令，直到 `quit` 或輸入結束
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if self.execute_line(&line?)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        self.err.flush()
    }

    /// 執行一行命令；空白行與註解行直接略過
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let tokens = tokenize(line);
        let Some((&first, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(verb) = Verb::lookup(first, self.config.abbreviated_commands) else {
            self.echo(first, &[])?;
            self.report(CommandError::UnknownCommand(first.to_string()))?;
            return Ok(Flow::Continue);
        };

        self.echo(verb.name(), args)?;
        match Command::parse(verb, args) {
            Ok(command) => self.execute(command),
            Err(err) => {
                self.report(err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// 執行已解析的命令
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        tracing::debug!(?command, "執行命令");

        match command {
            Command::AddPart { id } => {
                if let Err(err) = self.catalog.register_part(&id) {
                    self.report(err)?;
                }
            }
            Command::AddAssembly {
                id,
                capacity,
                components,
            } => {
                if let Err(err) = self.add_assembly(&id, capacity, &components) {
                    self.report(err)?;
                }
            }
            Command::FulfillOrder { lines } => {
                let mut resolution = Resolution::new();
                let result = self
                    .resolver
                    .fulfill_order(&mut self.catalog, &lines, &mut resolution);

                self.report_progress(&resolution)?;
                match result {
                    Ok(()) => report::shortages(&mut self.out, &resolution.shortages)?,
                    Err(err) => self.report(format_args!("{} -- order canceled", err))?,
                }
            }
            Command::Stock { id, quantity } => {
                let mut resolution = Resolution::new();
                let result = self
                    .resolver
                    .stock(&mut self.catalog, &id, quantity, &mut resolution);
                self.finish(result, &resolution)?;
            }
            Command::Restock { id } => {
                let target = match id.as_deref() {
                    Some(id) => RestockTarget::Assembly(id),
                    None => RestockTarget::All,
                };

                let mut resolution = Resolution::new();
                let result = self
                    .resolver
                    .restock(&mut self.catalog, target, &mut resolution);
                self.finish(result, &resolution)?;
            }
            Command::Empty { id } => {
                if let Err(err) = self.catalog.empty_assembly(&id) {
                    self.report(err)?;
                }
            }
            Command::Inventory { id: None } => {
                report::inventory(&mut self.out, &self.catalog, self.config.restock_threshold)?;
            }
            Command::Inventory { id: Some(id) } => {
                if let Err(err) = ItemKind::Assembly.validate(&id) {
                    self.report(err)?;
                } else if let Some(assembly) = self.catalog.assembly(&id) {
                    report::assembly_detail(&mut self.out, assembly)?;
                } else {
                    self.report(InventoryError::UnknownItem(id))?;
                }
            }
            Command::Parts => report::parts(&mut self.out, &self.catalog)?,
            Command::Help => report::help(&mut self.out)?,
            Command::Clear => self.catalog.reset(),
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// 目前的目錄
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 取回輸出端（測試用）
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    /// 先驗證組件ID，再逐一驗證子件與用量，全部通過才註冊
    fn add_assembly(
        &mut self,
        id: &str,
        capacity: Quantity,
        components: &[ComponentLine],
    ) -> inv_core::Result<()> {
        ItemKind::Assembly.validate(id)?;

        let mut bom = BillOfMaterials::new();
        for line in components {
            self.catalog.check_component(&line.id)?;
            if line.quantity <= 0 {
                return Err(InventoryError::InvalidQuantity {
                    id: line.id.clone(),
                    quantity: line.token.clone(),
                });
            }
            bom.add(&line.id, line.quantity)?;
        }

        self.catalog.register_assembly(id, capacity, bom)
    }

    fn finish(
        &mut self,
        result: inv_core::Result<()>,
        resolution: &Resolution,
    ) -> io::Result<()> {
        self.report_progress(resolution)?;
        if let Err(err) = result {
            self.report(err)?;
        }
        report::shortages(&mut self.out, &resolution.shortages)
    }

    fn report_progress(&mut self, resolution: &Resolution) -> io::Result<()> {
        report::events(&mut self.out, &resolution.events)?;
        for warning in &resolution.warnings {
            self.report(warning)?;
        }
        Ok(())
    }

    fn echo(&mut self, verb: &str, args: &[&str]) -> io::Result<()> {
        if !self.config.echo_commands {
            return Ok(());
        }

        write!(self.out, "+ {}", verb)?;
        for arg in args {
            write!(self.out, " {}", arg)?;
        }
        writeln!(self.out)
    }

    fn report(&mut self, err: impl Display) -> io::Result<()> {
        writeln!(self.err, "!!! {}", err)
    }
}
