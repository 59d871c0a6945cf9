//! Headless progression simulator - drives two weeks of activity and
//! reports how the XP economy and achievements play out.

use tasknova::achievements::AchievementRegistry;
use tasknova::core::ProgressConfig;
use tasknova::profile::UserProfile;
use tasknova::progress::{purchase_theme, record_activity, Activity, Habit};

const DAYS: usize = 14;
const TASKS_PER_DAY: u32 = 4;
const POMODOROS_PER_DAY: u32 = 3;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== TaskNova Progression Simulation ===\n");

    let config = ProgressConfig::default();
    let registry = AchievementRegistry::builtin();
    let mut profile = UserProfile::new();

    profile.habits.habits.push(Habit::new("Morning stretch"));
    profile.habits.habits.push(Habit::new("Read 20 pages"));

    let mut total_unlocks: Vec<String> = Vec::new();

    for day in 0..DAYS {
        let weekday = day % 7;
        if day > 0 && weekday == 0 {
            profile.habits.start_new_week();
        }
        let mut day_xp = 0;

        for _ in 0..TASKS_PER_DAY {
            let outcome = record_activity(&mut profile, &registry, Activity::TaskCompleted, &config);
            day_xp += outcome.xp_awarded;
            total_unlocks.extend(outcome.newly_unlocked);
        }

        for habit in 0..profile.habits.habits.len() {
            let outcome = record_activity(
                &mut profile,
                &registry,
                Activity::HabitCompleted { habit, today: weekday },
                &config,
            );
            day_xp += outcome.xp_awarded;
            total_unlocks.extend(outcome.newly_unlocked);
        }

        for _ in 0..POMODOROS_PER_DAY {
            let outcome =
                record_activity(&mut profile, &registry, Activity::PomodoroCycleFinished, &config);
            total_unlocks.extend(outcome.newly_unlocked);
        }

        // Drink up to the daily goal
        for _ in 0..profile.water.goal {
            let outcome = record_activity(&mut profile, &registry, Activity::WaterGlass, &config);
            day_xp += outcome.xp_awarded;
            total_unlocks.extend(outcome.newly_unlocked);
        }
        profile.water.intake = 0; // next day

        println!(
            "Day {:>2}: +{:>3} XP  level {:>2}  coins {:>4}",
            day + 1,
            day_xp,
            profile.level,
            profile.store.coins
        );
    }

    // Spend the level-up coins once a theme is affordable
    match purchase_theme(&mut profile.store, "theme-sunset") {
        Ok(price) => {
            println!("\nBought theme-sunset for {} coins", price);
            total_unlocks.extend(tasknova::achievements::evaluate(&registry, &mut profile));
        }
        Err(e) => println!("\nCould not buy theme-sunset: {}", e),
    }

    println!("\n=== Final state ===");
    println!("Level {}  ({} XP into the next)", profile.level, profile.xp);
    println!("Coins: {}", profile.store.coins);
    println!("Tasks completed: {}", profile.tasks.completed);
    println!("Pomodoro cycles: {}", profile.pomodoro.cycles);
    println!("Best habit streak: {}", profile.habits.best_streak);
    println!("Achievements unlocked ({}):", total_unlocks.len());
    for id in &total_unlocks {
        match registry.get(id) {
            Some(entry) => println!("  {} - {}", entry.id, entry.title),
            None => println!("  {}", id),
        }
    }
}
