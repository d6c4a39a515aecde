/*! Test coverage for the context-owned object graph.
 *
 * Canonicalization is the contract the bridge leans on: equal constant and attribute requests
 * must come back as the same reference within one context. These tests pin that down along with
 * the type interner and the function surface.
 */

mod constant_tests;
