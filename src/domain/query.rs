//! Query engine: filter and sort the full company set.
//!
//! [`query`] is pure and deterministic. Stages run in a fixed order:
//!
//! 1. **Name search**: case-insensitive substring match on `name`
//! 2. **Industry**: exact, case-sensitive match on `industry`
//! 3. **Sort**: stable, so equal keys keep their filtered order
//!
//! The input slice is never reordered; the result is a new vector.

use crate::domain::company::Company;
use crate::domain::criteria::{QueryCriteria, SortOption};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produces the visible ordered subset of `all` before pagination.
///
/// # Examples
///
/// ```
/// use company_directory::{query, Company, QueryCriteria, SortOption};
///
/// let all = vec![
///     Company::new(1, "TechCorp", "Oslo", "Software"),
///     Company::new(2, "BioTech", "Lyon", "Biotech"),
///     Company::new(3, "Healthcare", "Rome", "Health"),
/// ];
/// let criteria = QueryCriteria {
///     search: "tech".to_string(),
///     sort: SortOption::NameAsc,
///     ..QueryCriteria::default()
/// };
///
/// let names: Vec<_> = query(&all, &criteria).into_iter().map(|c| c.name).collect();
/// assert_eq!(names, ["BioTech", "TechCorp"]);
/// ```
#[must_use]
pub fn query(all: &[Company], criteria: &QueryCriteria) -> Vec<Company> {
    let _span = tracing::debug_span!(
        "query",
        total = all.len(),
        search_len = criteria.search.len(),
        industry = %criteria.industry,
        sort = %criteria.sort
    )
    .entered();

    let needle = criteria.search_needle();

    let mut items: Vec<Company> = all
        .iter()
        .filter(|company| matches_search(company, &needle))
        .filter(|company| matches_industry(company, &criteria.industry))
        .cloned()
        .collect();

    sort_companies(&mut items, criteria.sort);

    tracing::debug!(matched = items.len(), "query applied");
    items
}

/// Returns `true` when `needle` (already trimmed and lower-cased) is empty or
/// occurs in the lower-cased name.
#[must_use]
pub fn matches_search(company: &Company, needle: &str) -> bool {
    needle.is_empty() || company.name.to_lowercase().contains(needle)
}

/// Returns `true` when `industry` is empty or equals the company's industry.
#[must_use]
pub fn matches_industry(company: &Company, industry: &str) -> bool {
    industry.is_empty() || company.industry == industry
}

/// Sorts in place. `slice::sort_by` is stable, which both directions rely on.
pub fn sort_companies(items: &mut [Company], sort: SortOption) {
    match sort {
        SortOption::None => {}
        SortOption::NameAsc => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::NameDesc => items.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortOption::EmployeesAsc => {
            items.sort_by_key(Company::employees_or_zero);
        }
        SortOption::EmployeesDesc => {
            items.sort_by(|a, b| b.employees_or_zero().cmp(&a.employees_or_zero()));
        }
    }
}

/// Locale-style name comparison.
///
/// Primary key is the base-letter sequence: accents are stripped and case is
/// folded, so `"apple"` sorts before `"Banana"` and `"Émile"` before
/// `"Zeta"`. Names with equal base letters order unaccented first (`"Emile"`
/// before `"Émile"`), then lowercase first (`"acme"` before `"Acme"`), then by
/// raw string.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

/// Distinct non-empty industries in the full set, sorted.
///
/// # Examples
///
/// ```
/// use company_directory::{distinct_industries, Company};
///
/// let all = vec![
///     Company::new(1, "A", "", "Retail"),
///     Company::new(2, "B", "", ""),
///     Company::new(3, "C", "", "Energy"),
///     Company::new(4, "D", "", "Retail"),
/// ];
/// assert_eq!(distinct_industries(&all), ["Energy", "Retail"]);
/// ```
#[must_use]
pub fn distinct_industries(all: &[Company]) -> Vec<String> {
    all.iter()
        .filter(|company| !company.industry.is_empty())
        .map(|company| company.industry.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn company(id: i64, name: &str, industry: &str, employees: Option<u64>) -> Company {
        let mut company = Company::new(id, name, "", industry);
        company.employees = employees;
        company
    }

    fn ids(items: &[Company]) -> Vec<i64> {
        items.iter().map(|c| c.id).collect()
    }

    fn criteria(search: &str, industry: &str, sort: SortOption) -> QueryCriteria {
        QueryCriteria {
            search: search.to_string(),
            industry: industry.to_string(),
            sort,
        }
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = query(&[], &criteria("x", "Retail", SortOption::NameAsc));
        assert!(result.is_empty());
        assert!(distinct_industries(&[]).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = vec![
            company(1, "TechCorp", "Software", None),
            company(2, "BioTech", "Biotech", None),
            company(3, "Healthcare", "Health", None),
        ];

        let result = query(&all, &criteria("tech", "", SortOption::None));
        assert_eq!(ids(&result), [1, 2]);
    }

    #[test]
    fn search_is_trimmed() {
        let all = vec![company(1, "TechCorp", "", None), company(2, "Acme", "", None)];
        let result = query(&all, &criteria("   corp  ", "", SortOption::None));
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn blank_search_keeps_everything() {
        let all = vec![company(1, "A", "", None), company(2, "B", "", None)];
        assert_eq!(ids(&query(&all, &criteria("   ", "", SortOption::None))), [1, 2]);
    }

    #[test]
    fn industry_match_is_exact_and_case_sensitive() {
        let all = vec![
            company(1, "A", "Retail", None),
            company(2, "B", "retail", None),
            company(3, "C", "Retail Banking", None),
        ];
        assert_eq!(ids(&query(&all, &criteria("", "Retail", SortOption::None))), [1]);
    }

    #[test]
    fn both_filters_apply_before_sort() {
        let all = vec![
            company(1, "Zeta Tech", "Software", Some(5)),
            company(2, "Alpha Tech", "Software", Some(50)),
            company(3, "Beta Tech", "Energy", Some(500)),
            company(4, "Gamma", "Software", Some(5000)),
        ];

        let result = query(&all, &criteria("tech", "Software", SortOption::NameAsc));
        assert_eq!(ids(&result), [2, 1]);
    }

    #[test]
    fn none_sort_preserves_source_order() {
        let all = vec![
            company(3, "C", "", None),
            company(1, "A", "", None),
            company(2, "B", "", None),
        ];
        assert_eq!(ids(&query(&all, &QueryCriteria::default())), [3, 1, 2]);
    }

    #[test]
    fn employees_desc_treats_missing_as_zero() {
        let all = vec![
            company(1, "Five", "", Some(5)),
            company(2, "Unknown", "", None),
            company(3, "Twenty", "", Some(20)),
        ];

        let desc = query(&all, &criteria("", "", SortOption::EmployeesDesc));
        assert_eq!(ids(&desc), [3, 1, 2]);

        let asc = query(&all, &criteria("", "", SortOption::EmployeesAsc));
        assert_eq!(ids(&asc), [2, 1, 3]);
    }

    #[test]
    fn name_sort_ignores_case_for_primary_order() {
        let all = vec![
            company(1, "banana", "", None),
            company(2, "Apple", "", None),
            company(3, "cherry", "", None),
        ];

        assert_eq!(ids(&query(&all, &criteria("", "", SortOption::NameAsc))), [2, 1, 3]);
        assert_eq!(ids(&query(&all, &criteria("", "", SortOption::NameDesc))), [3, 1, 2]);
    }

    #[test]
    fn compare_names_puts_lowercase_first_on_fold_tie() {
        assert_eq!(compare_names("acme", "Acme"), Ordering::Less);
        assert_eq!(compare_names("Acme", "acme"), Ordering::Greater);
        assert_eq!(compare_names("Acme", "Acme"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_by_base_letter() {
        assert_eq!(compare_names("Émile", "Zeta"), Ordering::Less);
        assert_eq!(compare_names("Emile", "Émile"), Ordering::Less);
        assert_eq!(compare_names("émile", "Émile"), Ordering::Less);

        let all = vec![
            Company::new(1, "Zeta", "", ""),
            Company::new(2, "Émile", "", ""),
            Company::new(3, "Alpha", "", ""),
        ];
        let criteria = QueryCriteria {
            sort: SortOption::NameAsc,
            ..Default::default()
        };
        let names: Vec<_> = query(&all, &criteria).into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Alpha", "Émile", "Zeta"]);
    }

    #[test]
    fn descending_sort_keeps_tie_order() {
        let all = vec![
            company(1, "Same", "", Some(10)),
            company(2, "Same", "", Some(10)),
            company(3, "Other", "", Some(10)),
        ];

        assert_eq!(ids(&query(&all, &criteria("", "", SortOption::NameDesc))), [1, 2, 3]);
        assert_eq!(
            ids(&query(&all, &criteria("", "", SortOption::EmployeesDesc))),
            [1, 2, 3]
        );
    }

    #[test]
    fn query_leaves_source_untouched() {
        let all = vec![company(2, "B", "", None), company(1, "A", "", None)];
        let before = all.clone();
        let _ = query(&all, &criteria("", "", SortOption::NameAsc));
        assert_eq!(all, before);
    }

    fn arb_company() -> impl Strategy<Value = Company> {
        (
            0i64..1000,
            "[A-Za-z ]{0,8}",
            prop::sample::select(vec!["", "Retail", "Energy", "Software"]),
            prop::option::of(0u64..50),
        )
            .prop_map(|(id, name, industry, employees)| company(id, &name, industry, employees))
    }

    fn arb_sort() -> impl Strategy<Value = SortOption> {
        prop::sample::select(SortOption::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn filters_commute(
            all in prop::collection::vec(arb_company(), 0..40),
            search in "[a-z]{0,2}",
            industry in prop::sample::select(vec!["", "Retail", "Energy"]),
        ) {
            let needle = search.trim().to_lowercase();
            let search_first: Vec<Company> = all
                .iter()
                .filter(|c| matches_search(c, &needle))
                .filter(|c| matches_industry(c, industry))
                .cloned()
                .collect();
            let industry_first: Vec<Company> = all
                .iter()
                .filter(|c| matches_industry(c, industry))
                .filter(|c| matches_search(c, &needle))
                .cloned()
                .collect();
            prop_assert_eq!(search_first, industry_first);
        }

        #[test]
        fn sort_is_stable(all in prop::collection::vec(arb_company(), 0..40), sort in arb_sort()) {
            let tagged: Vec<Company> = all
                .into_iter()
                .enumerate()
                .map(|(idx, mut c)| { c.id = i64::try_from(idx).unwrap_or(i64::MAX); c })
                .collect();
            let sorted = query(&tagged, &criteria("", "", sort));

            for pair in sorted.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let equal_keys = match sort {
                    SortOption::None => true,
                    SortOption::NameAsc | SortOption::NameDesc => compare_names(&a.name, &b.name) == Ordering::Equal,
                    SortOption::EmployeesAsc | SortOption::EmployeesDesc => a.employees_or_zero() == b.employees_or_zero(),
                };
                if equal_keys {
                    prop_assert!(a.id < b.id);
                }
            }
        }

        #[test]
        fn query_is_idempotent(
            all in prop::collection::vec(arb_company(), 0..40),
            search in "[a-z]{0,2}",
            sort in arb_sort(),
        ) {
            let c = criteria(&search, "", sort);
            prop_assert_eq!(query(&all, &c), query(&all, &c));
        }
    }
}
