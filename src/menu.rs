use ratatui::{prelude::*, widgets::*};

// Emitted by `MenuState::enter`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSignal {
    None,
    // names from the root item down to the chosen leaf
    Selected(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(name: &str, children: Vec<MenuItem>) -> Self {
        Self {
            name: name.to_string(),
            children,
        }
    }
    pub fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: vec![],
        }
    }
}

// Navigation state: cursor, nesting path, last chosen leaf
#[derive(Debug)]
pub struct MenuState {
    pub root_items: Vec<MenuItem>,
    pub nav_stack: Vec<usize>,
    pub list_state: ListState,
    pub last_selected: Option<Vec<String>>,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            root_items: items,
            nav_stack: Vec::new(),
            list_state: state,
            last_selected: None,
        }
    }

    pub fn get_current_items(&self) -> &[MenuItem] {
        let mut current_list = &self.root_items;
        for &index in &self.nav_stack {
            if let Some(item) = current_list.get(index) {
                current_list = &item.children;
            }
        }
        current_list
    }

    // Names of the items entered so far, outermost first
    pub fn breadcrumb(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.nav_stack.len());
        let mut current_list = &self.root_items;
        for &index in &self.nav_stack {
            if let Some(item) = current_list.get(index) {
                names.push(item.name.clone());
                current_list = &item.children;
            }
        }
        names
    }

    pub fn depth(&self) -> usize {
        self.nav_stack.len()
    }

    pub fn up(&mut self) {
        let len = self.get_current_items().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn down(&mut self) {
        let len = self.get_current_items().len();
        if len == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn enter(&mut self) -> MenuSignal {
        let Some(selected_idx) = self.list_state.selected() else {
            return MenuSignal::None;
        };
        let Some((has_children, name)) = self
            .get_current_items()
            .get(selected_idx)
            .map(|item| (!item.children.is_empty(), item.name.clone()))
        else {
            return MenuSignal::None;
        };

        if has_children {
            self.nav_stack.push(selected_idx);
            self.list_state.select(Some(0));
            return MenuSignal::None;
        }

        let mut path = self.breadcrumb();
        path.push(name);
        self.last_selected = Some(path.clone());
        MenuSignal::Selected(path)
    }

    pub fn back(&mut self) {
        if let Some(last_index) = self.nav_stack.pop() {
            self.list_state.select(Some(last_index));
            self.last_selected = None;
        }
    }
}

pub struct Menu<'a> {
    block: Option<Block<'a>>,
    highlight_style: Style,
}

impl<'a> Menu<'a> {
    pub fn new() -> Self {
        Self {
            block: None,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }
}

impl Default for Menu<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> StatefulWidget for Menu<'a> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items_data = state.get_current_items();

        let list_items: Vec<ListItem> = items_data
            .iter()
            .map(|i| {
                let content = if i.children.is_empty() {
                    format!(" {} ", i.name)
                } else {
                    format!(" {} ->", i.name)
                };
                ListItem::new(content)
            })
            .collect();

        let mut list = List::new(list_items)
            .highlight_style(self.highlight_style)
            .highlight_symbol(">> ");

        if let Some(b) = self.block {
            list = list.block(b);
        }

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}
