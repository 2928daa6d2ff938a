use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studyhub_core::catalog::{enrollment_overlay, process, CatalogFilter, SortKey};
use studyhub_core::model::{Course, CourseType, Enrollment, EnrollmentStatus};

fn make_catalog(n: usize) -> Vec<Course> {
    let base = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let mut course: Course =
                serde_json::from_str(&format!(r#"{{"_id": "c{i}", "title": "Course {i}"}}"#))
                    .unwrap();
            course.language = if i % 3 == 0 { "en" } else { "sv" }.into();
            course.category = format!("category-{}", i % 7);
            course.difficulty = Some((i % 4 + 1) as u8);
            course.course_type = if i % 5 == 0 {
                CourseType::Challenge
            } else {
                CourseType::Course
            };
            course.likes = (0..i % 20).map(|u| format!("u{u}")).collect();
            course.created_at = Some(base + Duration::hours(i as i64));
            course
        })
        .collect()
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    let catalog = make_catalog(1000);
    let wildcard = CatalogFilter::default();
    let narrow = CatalogFilter::from_selectors(Some("en"), Some("2"), None, Some("course"));

    for sort in [
        SortKey::Date,
        SortKey::Popularity,
        SortKey::Difficulty,
        SortKey::Category,
    ] {
        group.bench_function(format!("n=1000,wildcard,sort={sort}"), |b| {
            b.iter(|| process(black_box(&catalog), black_box(&wildcard), black_box(sort)))
        });
    }

    group.bench_function("n=1000,narrow,sort=date", |b| {
        b.iter(|| process(black_box(&catalog), black_box(&narrow), black_box(SortKey::Date)))
    });

    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let enrollments: Vec<Enrollment> = (0..500)
        .map(|i| Enrollment {
            course_id: format!("c{i}"),
            status: EnrollmentStatus::InProgress,
        })
        .collect();

    c.bench_function("enrollment_overlay,n=500", |b| {
        b.iter(|| enrollment_overlay(black_box(&enrollments)))
    });
}

criterion_group!(benches, bench_process, bench_overlay);
criterion_main!(benches);
