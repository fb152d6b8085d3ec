//! Built-in starting model for a small seasonal café.

use rust_decimal_macros::dec;

use super::business_model::{BusinessModel, Costs, DailyRevenueBook, Revenue};
use super::cost_items::{MonthlyCost, PersonnelCost};
use super::revenue_items::{DailyRevenue, FixedEvent, TicketedEvent};

impl Default for BusinessModel {
    fn default() -> Self {
        Self {
            costs: Costs {
                personnel: default_personnel(),
                goods: default_goods(),
                operating: default_operating(),
            },
            revenue: Revenue {
                daily: default_daily(),
                ticketed: default_ticketed(),
                fixed: default_fixed(),
            },
        }
    }
}

fn default_personnel() -> Vec<PersonnelCost> {
    vec![
        PersonnelCost::new(
            "exp-barista-40h",
            "Experienced Barista (Full Time 40h)",
            dec!(3000),
            dec!(0),
            dec!(0),
        ),
        PersonnelCost::new(
            "exp-barista-20h",
            "Experienced Barista (Part Time 20h)",
            dec!(1500),
            dec!(1),
            dec!(1),
        ),
        PersonnelCost::new(
            "trained-staff-40h",
            "Trained Staff/Service (Full Time 40h)",
            dec!(3180),
            dec!(1),
            dec!(1),
        ),
        PersonnelCost::new(
            "trained-staff-20h",
            "Trained Staff/Service (Part Time 20h)",
            dec!(1590),
            dec!(0),
            dec!(0),
        ),
        PersonnelCost::new(
            "untrained-staff-40h",
            "Untrained Staff (Full Time 40h)",
            dec!(2500),
            dec!(0),
            dec!(0),
        ),
        PersonnelCost::new(
            "untrained-staff-20h",
            "Untrained Staff (Part Time 20h)",
            dec!(1250),
            dec!(1),
            dec!(0),
        ),
        PersonnelCost::new("mini-jobbers", "Mini-Jobbers", dec!(700), dec!(1), dec!(2)),
    ]
}

fn default_goods() -> Vec<MonthlyCost> {
    vec![
        MonthlyCost::new("cogs", "Cost of Goods Sold (COGS)", dec!(2000)),
        MonthlyCost::new("consumables", "Consumables", dec!(600)),
        MonthlyCost::new("cleaning", "Cleaning", dec!(600)),
        MonthlyCost::new("other-variable-costs", "Other Variable Costs", dec!(300)),
    ]
}

fn default_operating() -> Vec<MonthlyCost> {
    vec![
        MonthlyCost::new("rent", "Rent", dec!(1750)),
        MonthlyCost::new("insurance", "Insurance", dec!(100)),
        MonthlyCost::new("utilities", "Utilities (Electricity, Gas, Water)", dec!(350)),
        MonthlyCost::new("internet-phone", "Internet/Phone, Software", dec!(150)),
        MonthlyCost::new("fees", "Fees (GEMA, card payments)", dec!(250)),
        MonthlyCost::new("maintenance", "Maintenance & Repairs", dec!(150)),
        MonthlyCost::new("misc-tax", "Miscellaneous (tax advisor, etc.)", dec!(300)),
    ]
}

fn default_daily() -> DailyRevenueBook {
    DailyRevenueBook {
        high_season: DailyRevenue {
            seating_capacity: dec!(50),
            table_turnover: dec!(2.5),
            occupancy: dec!(70),
            spend: dec!(10),
            open_days: dec!(20),
        },
        winter_season: DailyRevenue {
            seating_capacity: dec!(50),
            table_turnover: dec!(1.5),
            occupancy: dec!(25),
            spend: dec!(10),
            open_days: dec!(16),
        },
    }
}

fn default_ticketed() -> Vec<TicketedEvent> {
    vec![
        TicketedEvent::new(
            "small-concerts",
            "Small Concerts",
            dec!(15),
            dec!(5),
            dec!(20),
            (dec!(1), dec!(2)),
        ),
        TicketedEvent::new(
            "trivia-nights",
            "Trivia Nights",
            dec!(10),
            dec!(10),
            dec!(20),
            (dec!(7), dec!(5)),
        ),
        TicketedEvent::new(
            "poetry-readings",
            "Poetry Readings",
            dec!(10),
            dec!(10),
            dec!(30),
            (dec!(1), dec!(2)),
        ),
        TicketedEvent::new(
            "board-game-nights",
            "Board Game Nights",
            dec!(5),
            dec!(10),
            dec!(20),
            (dec!(7), dec!(5)),
        ),
        TicketedEvent::new(
            "castle-stories",
            "Castle/Forest Stories",
            dec!(10),
            dec!(10),
            dec!(30),
            (dec!(1), dec!(2)),
        ),
    ]
}

fn default_fixed() -> Vec<FixedEvent> {
    vec![
        FixedEvent::new(
            "coffee-classes",
            "Coffee Brewing Classes",
            dec!(60),
            (dec!(1), dec!(2)),
        ),
        FixedEvent::new("small-weddings", "Small Weddings", dec!(3000), (dec!(1), dec!(0))),
        FixedEvent::new("birthday-parties", "Birthday Parties", dec!(1500), (dec!(1), dec!(1))),
        FixedEvent::new("company-retreats", "Company Retreats", dec!(2500), (dec!(1), dec!(1))),
    ]
}
